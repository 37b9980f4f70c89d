//! 텍스트 변환기 공통 인터페이스

use std::collections::BTreeSet;

use crate::core::layout::SubstitutionTable;

/// 텍스트를 다른 자판의 텍스트로 변환하는 기능
///
/// `target_symbols`는 호출자가 특히 살리고 싶은 문자 집합으로,
/// 사전 기반 변환기에서만 의미가 있음.
pub trait TextTransformer {
    /// 대상 문자 집합(선택)을 함께 넘겨 변환
    fn transform_with(&mut self, source: &str, target_symbols: Option<&BTreeSet<char>>) -> String;

    /// 대상 문자 집합 없이 변환
    fn transform(&mut self, source: &str) -> String {
        self.transform_with(source, None)
    }
}

/// 문자 단위 치환만 하는 변환기
#[derive(Debug, Clone, Default)]
pub struct SymbolTransformer {
    table: SubstitutionTable,
}

impl SymbolTransformer {
    pub fn new(table: SubstitutionTable) -> Self {
        Self { table }
    }
}

impl TextTransformer for SymbolTransformer {
    fn transform_with(&mut self, source: &str, _target_symbols: Option<&BTreeSet<char>>) -> String {
        self.table.map(source)
    }
}
