//! 자판 치환 핵심 모듈

pub mod converter;
pub mod layout;
pub mod transformer;

pub use layout::SubstitutionTable;
pub use transformer::{SymbolTransformer, TextTransformer};
