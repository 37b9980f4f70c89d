pub mod config;
pub mod core;
pub mod dictionary;
pub mod lesson;
pub mod reconstruct;

pub use self::core::converter::convert;
pub use self::core::{SubstitutionTable, SymbolTransformer, TextTransformer};
pub use dictionary::{DictionaryError, DictionaryIndex};
pub use reconstruct::{EngineConfig, TransformStats, WordEngine};
