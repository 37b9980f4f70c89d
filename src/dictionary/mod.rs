//! 빈도 사전 색인
//!
//! 단어 자체가 아니라 단어를 이루는 문자 집합(시그니처)을 키로 색인합니다.
//! 한 시그니처 안에서는 길이별로 대표 단어 하나만 유지합니다.

mod index;
mod signature;

pub use index::{DictionaryError, DictionaryIndex, LengthMap};
pub use signature::Signature;
