//! 시그니처 기반 빈도 사전 색인
//!
//! 한 줄에 한 단어인 사전 파일을 읽어 시그니처 -> (길이 -> 대표 단어) 형태로 색인합니다.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use super::signature::Signature;

/// 사전 로드 에러
#[derive(Debug)]
pub enum DictionaryError {
    /// 파일 읽기 실패
    IoError(PathBuf, std::io::Error),
    /// 단어가 하나도 없음
    Empty(PathBuf),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::IoError(path, e) => {
                write!(f, "사전 파일 읽기 오류 ({}): {}", path.display(), e)
            }
            DictionaryError::Empty(path) => {
                write!(f, "사전 파일에 단어가 없습니다: {}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::IoError(_, e) => Some(e),
            DictionaryError::Empty(_) => None,
        }
    }
}

/// 길이 -> 대표 단어
pub type LengthMap = BTreeMap<usize, String>;

/// 시그니처 색인 사전
///
/// 같은 (시그니처, 길이)에는 대표 단어 하나만 남음. 나중에 읽은 줄이 덮어씀.
/// 생성 후에는 변경되지 않음.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: BTreeMap<Signature, LengthMap>,
    /// 읽어들인 줄 수
    lines_read: usize,
}

impl DictionaryIndex {
    /// 줄 목록으로 색인 생성 (줄은 가공 없이 그대로 사용)
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: BTreeMap<Signature, LengthMap> = BTreeMap::new();
        let mut lines_read = 0;

        for line in lines {
            let word = line.as_ref();
            entries
                .entry(Signature::of(word))
                .or_default()
                .insert(word.chars().count(), word.to_string());
            lines_read += 1;
        }

        Self {
            entries,
            lines_read,
        }
    }

    /// 사전 파일에서 색인 로드
    ///
    /// 파일이 없거나 UTF-8이 아니거나 빈 줄 외에 단어가 없으면 에러.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DictionaryError::IoError(path.to_path_buf(), e))?;

        if content.lines().all(|line| line.trim().is_empty()) {
            return Err(DictionaryError::Empty(path.to_path_buf()));
        }
        let index = Self::build(content.lines());

        log::info!(
            "사전 로드 완료: {} ({}줄, 시그니처 {}개, 단어 {}개)",
            path.display(),
            index.lines_read,
            index.signature_count(),
            index.word_count()
        );
        Ok(index)
    }

    /// 시그니처가 정확히 일치하는 항목
    pub fn exact(&self, signature: &Signature) -> Option<&LengthMap> {
        self.entries.get(signature)
    }

    /// `signature`를 포함하면서 `symbols` 안에 들어가는 첫 번째 시그니처의 항목
    ///
    /// 시그니처 순서대로 탐색하므로 결과는 항상 같음.
    pub fn superset_within(
        &self,
        signature: &Signature,
        symbols: &BTreeSet<char>,
    ) -> Option<&LengthMap> {
        // symbols에 없는 문자가 있으면 어떤 상위 집합도 조건을 만족할 수 없음
        if !signature.is_within(symbols) {
            return None;
        }

        self.entries
            .iter()
            .find(|(key, _)| signature.is_subset(key) && key.is_within(symbols))
            .map(|(_, lengths)| lengths)
    }

    /// 시그니처 수
    pub fn signature_count(&self) -> usize {
        self.entries.len()
    }

    /// 남아있는 대표 단어 수
    pub fn word_count(&self) -> usize {
        self.entries.values().map(|lengths| lengths.len()).sum()
    }

    /// 색인에 사용한 줄 수
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}
