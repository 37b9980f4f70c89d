//! 사전 기반 단어 복원 시스템
//!
//! 영문 자판으로 잘못 입력한 러시아어 텍스트를 실제 단어로 되살립니다.
//!
//! # 개요
//!
//! 토큰 하나는 다음 순서로 처리됩니다:
//!
//! 1. **자판 변환**: `core::layout`의 문자 단위 치환
//! 2. **한 손가락 검사**: 모든 문자가 한 손가락 키 묶음 안이면 그대로 둠
//! 3. **접두어 매칭**: 남은 부분의 가장 긴 접두어부터 줄여가며 사전 조회
//!    - 시그니처 정확히 일치
//!    - 대상 문자 안에 들어가는 상위 시그니처
//!    - 관측 문자 안에 들어가는 상위 시그니처
//! 4. **문자 단위 폴백**: 어떤 길이로도 맞지 않으면 한 글자를 그대로 소비
//!
//! # 사용 예시
//!
//! ```
//! use raskladka::dictionary::DictionaryIndex;
//! use raskladka::reconstruct::WordEngine;
//! use raskladka::TextTransformer;
//!
//! let mut engine = WordEngine::new(DictionaryIndex::build(["еда", "вода"]));
//! assert_eq!(engine.transform("tlf, djlf"), "еда, вода");
//!
//! let stats = engine.stats();
//! assert_eq!(stats.transformed_to_word, 1);      // "вода"
//! assert_eq!(stats.transformed_to_word_part, 1); // "еда" + ","
//! ```

mod config;
mod engine;
mod fingers;
mod symbols;

// 공개 인터페이스
pub use config::EngineConfig;
pub use engine::{TransformStats, WordEngine};
pub use fingers::FingerGroups;
pub use symbols::SymbolTracker;
