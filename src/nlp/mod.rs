//! Text processing
//!
//! - Word-boundary tokenization
//! - Normalization (lowercase, alphanumeric only, stopwords removed)
//! - Frequency counting

mod frequency;
mod normalizer;
pub mod stopwords;
mod tokenizer;

pub use frequency::{FrequencyTable, WordCount};
pub use normalizer::TextNormalizer;
pub use stopwords::is_stopword;
pub use tokenizer::{Token, TokenKind, Tokenizer};
