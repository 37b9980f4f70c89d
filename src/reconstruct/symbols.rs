//! 관측 문자 / 대상 문자 추적

use std::collections::BTreeSet;

use crate::core::layout::single_lowercase;

/// 엔진이 지금까지 본 문자(known)와 현재 호출의 대상 문자(target)
///
/// known은 엔진 수명 동안 늘어나기만 함. target은 호출마다 통째로 교체.
/// 두 집합 모두 소문자로 저장.
#[derive(Debug, Clone, Default)]
pub struct SymbolTracker {
    known: BTreeSet<char>,
    target: Option<BTreeSet<char>>,
}

impl SymbolTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 텍스트의 모든 문자(공백 제외)를 known에 추가
    pub fn observe(&mut self, text: &str) {
        self.known
            .extend(text.chars().filter(|&c| c != ' ').map(lowercase));
    }

    /// 대상 문자 집합 교체
    pub fn set_target(&mut self, symbols: &BTreeSet<char>) {
        self.target = Some(symbols.iter().copied().map(lowercase).collect());
    }

    /// 대상 문자 집합 해제
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn known(&self) -> &BTreeSet<char> {
        &self.known
    }

    pub fn target(&self) -> Option<&BTreeSet<char>> {
        self.target.as_ref()
    }
}

fn lowercase(c: char) -> char {
    single_lowercase(c).unwrap_or(c)
}
