//! 사전 기반 단어 복원 엔진
//!
//! 자판 변환 결과를 공백 단위 토큰으로 나누고, 각 토큰을 시그니처 사전에 맞춰
//! 실제 단어로 복원합니다. 복원하지 못한 부분은 문자 단위 변환 결과를 그대로 씁니다.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::core::layout::{single_lowercase, single_uppercase, SubstitutionTable};
use crate::core::transformer::TextTransformer;
use crate::dictionary::{DictionaryError, DictionaryIndex, LengthMap, Signature};

use super::config::EngineConfig;
use super::fingers::FingerGroups;
use super::symbols::SymbolTracker;

/// 변환 방식별 누적 횟수
///
/// 같은 엔진에서 호출할 때마다 누적되며 줄어들지 않음.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// 사전에 맞지 않아 문자 단위로 남긴 횟수
    pub transformed_by_symbol: u64,
    /// 토큰 일부를 사전 단어로 바꾼 횟수
    pub transformed_to_word_part: u64,
    /// 토큰 전체를 한 번에 사전 단어로 바꾼 횟수
    pub transformed_to_word: u64,
}

impl TransformStats {
    pub fn total(&self) -> u64 {
        self.transformed_by_symbol + self.transformed_to_word_part + self.transformed_to_word
    }
}

/// 토큰을 구성하는 조각
#[derive(Debug)]
enum Part {
    /// 사전 대표 단어
    Word(String),
    /// 문자 단위 변환 결과
    Symbol(char),
}

/// 단어 복원 엔진
///
/// 사전 색인은 생성 후 바뀌지 않고, 관측 문자와 통계만 호출마다 갱신됨.
#[derive(Debug)]
pub struct WordEngine {
    table: SubstitutionTable,
    index: DictionaryIndex,
    fingers: FingerGroups,
    symbols: SymbolTracker,
    config: EngineConfig,
    stats: TransformStats,
}

impl WordEngine {
    /// 기본 자판/손가락 배치/설정으로 엔진 생성
    pub fn new(index: DictionaryIndex) -> Self {
        Self::with_config(index, EngineConfig::default())
    }

    /// 설정을 지정하여 엔진 생성
    pub fn with_config(index: DictionaryIndex, config: EngineConfig) -> Self {
        Self::with_layout(
            SubstitutionTable::en_ru(),
            index,
            FingerGroups::ru(),
            config,
        )
    }

    /// 자판 테이블과 손가락 배치까지 지정하여 엔진 생성
    pub fn with_layout(
        table: SubstitutionTable,
        index: DictionaryIndex,
        fingers: FingerGroups,
        config: EngineConfig,
    ) -> Self {
        Self {
            table,
            index,
            fingers,
            symbols: SymbolTracker::new(),
            config,
            stats: TransformStats::default(),
        }
    }

    /// 사전 파일에서 로드하여 엔진 생성
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let index = DictionaryIndex::load(path)?;
        Ok(Self::new(index))
    }

    /// 대상 문자 집합을 함께 넘겨 변환
    ///
    /// 변환 전에 자판 변환된 텍스트의 모든 문자를 관측 문자에 추가함.
    pub fn transform_with_target_symbols(
        &mut self,
        text: &str,
        target_symbols: &BTreeSet<char>,
    ) -> String {
        self.run(text, Some(target_symbols))
    }

    /// 공백 없는 토큰 하나를 복원
    ///
    /// # Examples
    /// ```
    /// use raskladka::dictionary::DictionaryIndex;
    /// use raskladka::reconstruct::WordEngine;
    ///
    /// let mut engine = WordEngine::new(DictionaryIndex::build(["еда"]));
    /// assert_eq!(engine.reconstruct("tlf"), "еда");
    /// assert_eq!(engine.reconstruct("Lft"), "Еда");
    /// assert_eq!(engine.stats().transformed_to_word, 2);
    /// ```
    pub fn reconstruct(&mut self, token: &str) -> String {
        self.reconstruct_token(token)
    }

    /// 현재까지의 누적 통계
    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    /// 지금까지 관측한 문자 (소문자)
    pub fn known_symbols(&self) -> &BTreeSet<char> {
        self.symbols.known()
    }

    fn run(&mut self, text: &str, target_symbols: Option<&BTreeSet<char>>) -> String {
        if let Some(targets) = target_symbols {
            let mapped = self.table.map(text);
            self.symbols.observe(&mapped);
            self.symbols.set_target(targets);
        }

        let result = text
            .split(' ')
            .map(|token| self.reconstruct_token(token))
            .collect::<Vec<_>>()
            .join(" ");

        self.symbols.clear_target();
        log::debug!("변환 결과: {} -> {}", text, result);
        result
    }

    fn reconstruct_token(&mut self, token: &str) -> String {
        let source: Vec<char> = token.chars().collect();
        let mapped: Vec<char> = source.iter().map(|&c| self.table.map_char(c)).collect();
        let lowered: Vec<char> = mapped
            .iter()
            .map(|&c| single_lowercase(c).unwrap_or(c))
            .collect();

        let signature: Signature = lowered.iter().copied().collect();
        if self.fingers.covers(&signature) {
            let kept: String = mapped.into_iter().collect();
            log::debug!("한 손가락 토큰 유지: {}", kept);
            return kept;
        }

        let mut parts = Vec::new();
        let mut pos = 0;
        while pos < lowered.len() {
            match self.match_prefix(&lowered[pos..]) {
                Some((word, consumed)) => {
                    parts.push(Part::Word(apply_case(word, mapped[pos])));
                    pos += consumed;
                }
                None => {
                    parts.push(Part::Symbol(self.fallback_char(&source, &mapped, pos)));
                    pos += 1;
                }
            }
        }

        self.record(&parts);
        log::debug!("토큰 복원: {} -> {:?}", token, parts);

        let mut result = String::with_capacity(token.len() * 2);
        for part in parts {
            match part {
                Part::Word(word) => result.push_str(&word),
                Part::Symbol(c) => result.push(c),
            }
        }
        result
    }

    /// 앞에서부터 가장 긴 후보를 사전에 맞춤
    ///
    /// 반환값: (대표 단어, 소비한 글자 수)
    fn match_prefix(&self, rest: &[char]) -> Option<(&str, usize)> {
        let min_len = self.config.min_candidate_len;
        if rest.len() < min_len {
            return None;
        }

        for len in (min_len..=rest.len()).rev() {
            let signature: Signature = rest[..len].iter().copied().collect();
            let Some(lengths) = self.lookup(&signature) else {
                continue;
            };

            // len-1 이상인 가장 짧은 대표 단어
            if let Some((&found, word)) = lengths.range(len - 1..).next() {
                if found <= len + self.config.length_slack {
                    return Some((word.as_str(), len));
                }
            }
        }

        None
    }

    /// 시그니처 조회: 정확히 일치 -> 대상 문자 안의 상위 집합 -> 관측 문자 안의 상위 집합
    fn lookup(&self, signature: &Signature) -> Option<&LengthMap> {
        self.index
            .exact(signature)
            .or_else(|| {
                self.symbols
                    .target()
                    .and_then(|targets| self.index.superset_within(signature, targets))
            })
            .or_else(|| self.index.superset_within(signature, self.symbols.known()))
    }

    /// 사전에 붙지 못한 문자 하나
    ///
    /// 토큰 마지막의 구두점 키가 글자로 바뀌었으면 원래 구두점을 돌려줌.
    fn fallback_char(&self, source: &[char], mapped: &[char], pos: usize) -> char {
        let is_trailing = pos > 0 && pos + 1 == source.len();
        if self.config.keep_trailing_punctuation
            && is_trailing
            && source[pos].is_ascii_punctuation()
            && mapped[pos].is_alphabetic()
        {
            return source[pos];
        }
        mapped[pos]
    }

    fn record(&mut self, parts: &[Part]) {
        if let [Part::Word(_)] = parts {
            self.stats.transformed_to_word += 1;
            return;
        }

        for part in parts {
            match part {
                Part::Word(_) => self.stats.transformed_to_word_part += 1,
                Part::Symbol(_) => self.stats.transformed_by_symbol += 1,
            }
        }
    }
}

impl TextTransformer for WordEngine {
    fn transform_with(&mut self, source: &str, target_symbols: Option<&BTreeSet<char>>) -> String {
        self.run(source, target_symbols)
    }
}

/// 입력 조각의 첫 글자가 대문자면 대표 단어의 첫 글자도 대문자로
fn apply_case(word: &str, first: char) -> String {
    if !first.is_uppercase() {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(head) => {
            let mut result = String::with_capacity(word.len());
            result.push(single_uppercase(head).unwrap_or(head));
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> WordEngine {
        WordEngine::new(DictionaryIndex::build([
            "еда", "вода", "чача", "привет", "молоко", "колом",
        ]))
    }

    #[test]
    fn test_whole_word() {
        let mut engine = engine();
        assert_eq!(engine.reconstruct("tlf"), "еда");
        assert_eq!(
            engine.stats(),
            TransformStats {
                transformed_to_word: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_capital_letter() {
        let mut engine = engine();
        assert_eq!(engine.reconstruct("Tlf"), "Еда");
        assert_eq!(engine.reconstruct("Lft"), "Еда");
        assert_eq!(engine.reconstruct("Ghbdtn"), "Привет");
        assert_eq!(engine.stats().transformed_to_word, 3);
    }

    #[test]
    fn test_mixed_order() {
        // 순서가 달라도 시그니처가 같으면 같은 단어
        let mut engine = engine();
        assert_eq!(engine.reconstruct("lft"), "еда");
    }

    #[test]
    fn test_one_finger_token_kept() {
        let mut engine = engine();
        assert_eq!(engine.reconstruct("rfv"), "кам");
        assert_eq!(engine.reconstruct("jnj"), "ото");
        assert_eq!(engine.stats(), TransformStats::default());
    }

    #[test]
    fn test_short_tokens() {
        let mut engine = engine();
        assert_eq!(engine.reconstruct(""), "");
        assert_eq!(engine.stats().total(), 0);

        // 한 글자이지만 손가락 묶음 밖
        assert_eq!(engine.reconstruct("1"), "1");
        assert_eq!(engine.stats().transformed_by_symbol, 1);
    }

    #[test]
    fn test_multi_part_with_inline_punctuation() {
        let mut engine = engine();
        // "чабн": "ча" -> "чача", 나머지는 문자 단위
        assert_eq!(engine.reconstruct("xf,y"), "чачабн");
        let stats = engine.stats();
        assert_eq!(stats.transformed_to_word_part, 1);
        assert_eq!(stats.transformed_by_symbol, 2);
        assert_eq!(stats.transformed_to_word, 0);
    }

    #[test]
    fn test_trailing_punctuation_kept() {
        let mut engine = engine();
        assert_eq!(engine.reconstruct("tlf,"), "еда,");
        assert_eq!(engine.stats().transformed_to_word_part, 1);
        assert_eq!(engine.stats().transformed_by_symbol, 1);
    }

    #[test]
    fn test_trailing_punctuation_mapped_when_disabled() {
        let index = DictionaryIndex::build(["еда"]);
        let config = EngineConfig::new().with_trailing_punctuation(false);
        let mut engine = WordEngine::with_config(index, config);
        assert_eq!(engine.reconstruct("tlf,"), "едаб");
    }

    #[test]
    fn test_length_ceiling() {
        // 길이 5 이상인 가장 짧은 대표 단어 선택
        let mut engine = engine();
        assert_eq!(engine.reconstruct("vjkjrj"), "колом");
        assert_eq!(engine.reconstruct("vjkjr"), "колом");
    }

    #[test]
    fn test_length_slack() {
        let index = DictionaryIndex::build(["дедеееда"]);

        let mut strict = WordEngine::new(index.clone());
        assert_eq!(strict.reconstruct("tlf"), "еда");
        assert_eq!(strict.stats().transformed_by_symbol, 3);
        assert_eq!(strict.stats().transformed_to_word, 0);

        let mut loose = WordEngine::with_config(index, EngineConfig::new().with_length_slack(5));
        assert_eq!(loose.reconstruct("tlf"), "дедеееда");
    }

    #[test]
    fn test_target_symbols() {
        let mut engine = engine();
        let targets: BTreeSet<char> = "еда".chars().collect();
        // "ед"는 정확히 일치하는 항목이 없지만 {а, д, е} ⊆ targets
        assert_eq!(engine.transform_with_target_symbols("tl", &targets), "еда");
        assert_eq!(engine.stats().transformed_to_word, 1);
    }

    #[test]
    fn test_exact_match_before_target_superset() {
        // {а, д, е}는 시그니처 순서상 {д, е}보다 앞이지만 정확히 일치하는 쪽이 먼저
        let mut engine = WordEngine::new(DictionaryIndex::build(["дед", "еда"]));
        let targets: BTreeSet<char> = "еда".chars().collect();
        assert_eq!(engine.transform_with_target_symbols("tl", &targets), "дед");
    }

    #[test]
    fn test_target_superset_before_known_superset() {
        let mut engine = WordEngine::new(DictionaryIndex::build(["еда", "еды"]));
        engine.transform_with_target_symbols("tlf", &BTreeSet::new());

        // 관측 문자 {а, д, е}만으로는 "еда"
        assert_eq!(engine.transform("tl"), "еда");

        // 대상 문자 {д, е, ы}가 관측 문자보다 먼저
        let targets: BTreeSet<char> = "еды".chars().collect();
        assert_eq!(engine.transform_with_target_symbols("tl", &targets), "еды");
    }

    #[test]
    fn test_plain_transform_without_known_symbols() {
        let mut engine = engine();
        assert_eq!(engine.transform("tl"), "ед");
        assert_eq!(engine.stats().transformed_by_symbol, 2);
        assert!(engine.known_symbols().is_empty());
    }

    #[test]
    fn test_known_symbols_persist_between_calls() {
        let mut engine = engine();
        engine.transform_with_target_symbols("tlf", &BTreeSet::new());
        assert_eq!(engine.known_symbols().len(), 3);

        // 이전 호출에서 관측한 문자로 상위 집합 매칭
        assert_eq!(engine.transform("tl"), "еда");
    }

    #[test]
    fn test_target_symbols_scoped_to_call() {
        let mut engine = engine();
        let targets: BTreeSet<char> = "чаеды".chars().collect();
        engine.transform_with_target_symbols("1", &targets);
        // targets는 호출이 끝나면 사라지고, known에는 '1'만 남음
        assert_eq!(engine.transform("tl"), "ед");
    }

    #[test]
    fn test_phrase() {
        let mut engine = engine();
        assert_eq!(engine.transform("tlf tlf"), "еда еда");
        assert_eq!(engine.transform("tlf, tlf"), "еда, еда");
        assert_eq!(engine.transform("tlf  djlf"), "еда  вода");
    }

    #[test]
    fn test_stats_monotonic() {
        let mut engine = engine();
        let mut previous = engine.stats();
        for text in ["tlf", "xf,y", "rfv", "tlf, djlf", "123"] {
            engine.transform(text);
            let current = engine.stats();
            assert!(current.transformed_by_symbol >= previous.transformed_by_symbol);
            assert!(current.transformed_to_word_part >= previous.transformed_to_word_part);
            assert!(current.transformed_to_word >= previous.transformed_to_word);
            previous = current;
        }
        assert!(previous.total() > 0);
    }

    #[test]
    fn test_apply_case() {
        assert_eq!(apply_case("еда", 'Е'), "Еда");
        assert_eq!(apply_case("еда", 'е'), "еда");
        assert_eq!(apply_case("", 'Е'), "");
    }
}
