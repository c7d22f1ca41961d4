//! Text normalizer: comment cells in, flat token list out

use super::stopwords::is_stopword;
use super::tokenizer::Tokenizer;
use crate::data::Cell;

/// Turns comments into lowercase, alphanumeric, non-stopword tokens
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    tokenizer: Tokenizer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a single comment
    pub fn normalize_text(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|token| token.is_alphanumeric() && !is_stopword(&token.text))
            .map(|token| token.text)
            .collect()
    }

    /// Normalize every valid string cell, in row order, into one flat list.
    ///
    /// Cells that are not text are skipped.
    pub fn normalize(&self, cells: &[Cell]) -> Vec<String> {
        cells
            .iter()
            .filter_map(Cell::as_text)
            .flat_map(|text| self.normalize_text(text))
            .collect()
    }
}
