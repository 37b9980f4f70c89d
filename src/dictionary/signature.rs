//! 단어의 문자 집합 시그니처

use std::collections::BTreeSet;

/// 단어를 이루는 서로 다른 문자들의 정렬된 집합
///
/// 순서와 반복은 무시하므로 "еда"와 "дае", "ееда"는 같은 시그니처를 가짐.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(BTreeSet<char>);

impl Signature {
    /// 문자열의 시그니처 (대소문자 그대로)
    pub fn of(word: &str) -> Self {
        word.chars().collect()
    }

    /// `self`의 모든 문자가 `other`에 있는지
    pub fn is_subset(&self, other: &Signature) -> bool {
        self.0.is_subset(&other.0)
    }

    /// `self`의 모든 문자가 주어진 문자 집합에 있는지
    pub fn is_within(&self, symbols: &BTreeSet<char>) -> bool {
        self.0.is_subset(symbols)
    }

    /// 서로 다른 문자 수
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for Signature {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
