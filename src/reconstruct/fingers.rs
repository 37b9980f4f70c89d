//! 손가락별 키 묶음
//!
//! 한 손가락으로만 치는 토큰은 자판 변환 결과를 신뢰하기 어려워
//! 사전 복원 대상에서 제외합니다.

use std::collections::BTreeSet;

use crate::dictionary::Signature;

/// ЙЦУКЕН 자판에서 손가락 하나가 담당하는 키 (소문자 기준)
const RU_FINGER_KEYS: &[&str] = &[
    "ёйфя",   // 왼손 새끼
    "цыч",    // 왼손 약지
    "увс",    // 왼손 중지
    "кеапми", // 왼손 검지
    "нгроть", // 오른손 검지
    "шлб",    // 오른손 중지
    "щдю",    // 오른손 약지
    "зхъжэ.,", // 오른손 새끼
];

/// 손가락별 문자 집합 목록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerGroups {
    groups: Vec<BTreeSet<char>>,
}

impl FingerGroups {
    /// 문자열 목록으로 생성 (문자열 하나가 손가락 하나)
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = keys
            .into_iter()
            .map(|k| k.as_ref().chars().collect())
            .collect();
        Self { groups }
    }

    /// ЙЦУКЕН 기본 손가락 배치
    pub fn ru() -> Self {
        Self::from_keys(RU_FINGER_KEYS)
    }

    /// 시그니처의 모든 문자가 어느 한 손가락 묶음 안에 있는지
    ///
    /// 빈 시그니처는 항상 true.
    pub fn covers(&self, signature: &Signature) -> bool {
        signature.is_empty() || self.groups.iter().any(|group| signature.is_within(group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for FingerGroups {
    fn default() -> Self {
        Self::ru()
    }
}
