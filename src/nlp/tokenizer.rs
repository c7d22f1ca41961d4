//! Word-boundary tokenizer
//!
//! Splits text on Unicode word boundaries (UAX #29), so punctuation ends up
//! in its own tokens, and splits contraction clitics (`n't`, `'s`, `'ll`, ...)
//! off their stems.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Clitics split off after an apostrophe
const CLITICS: &[&str] = &["s", "m", "d", "ll", "re", "ve"];

/// Token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Letters (and possibly digits)
    Word,
    /// Digits only
    Number,
    /// Contraction suffix such as `n't` or `'s`
    Clitic,
    /// Punctuation, symbols, emoji and mixed segments
    Symbol,
}

/// A single token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text as it appears after case folding
    pub text: String,
    /// Index of the token within its text
    pub position: usize,
    /// Token category
    pub kind: TokenKind,
}

impl Token {
    /// Whether the token consists only of letters and digits
    pub fn is_alphanumeric(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Number)
    }
}

/// Word-boundary tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Lowercase tokens
    lowercase: bool,
}

impl Tokenizer {
    /// Create a lowercasing tokenizer that splits contractions
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    /// Enable/disable lowercase conversion
    pub fn lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    /// Tokenize text
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let folded = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut tokens = Vec::new();
        for segment in folded.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            for (i, part) in split_contraction(segment).iter().enumerate() {
                let kind = if i > 0 {
                    TokenKind::Clitic
                } else {
                    classify(part)
                };
                tokens.push(Token {
                    text: part.to_string(),
                    position: tokens.len(),
                    kind,
                });
            }
        }

        tokens
    }

    /// Tokenize and return only the token strings
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Split `don't` into `do` + `n't` and `we'll` into `we` + `'ll`
fn split_contraction(segment: &str) -> Vec<&str> {
    for suffix in ["n't", "n\u{2019}t"] {
        if let Some(stem) = segment.strip_suffix(suffix) {
            if !stem.is_empty() {
                return vec![stem, &segment[stem.len()..]];
            }
        }
    }

    if let Some(pos) = segment.rfind(is_apostrophe) {
        let (stem, clitic) = segment.split_at(pos);
        let tail: String = clitic.chars().skip(1).collect();
        if !stem.is_empty() && CLITICS.contains(&tail.as_str()) {
            return vec![stem, clitic];
        }
    }

    vec![segment]
}

fn classify(segment: &str) -> TokenKind {
    if segment.is_empty() || !segment.chars().all(char::is_alphanumeric) {
        TokenKind::Symbol
    } else if segment.chars().all(char::is_numeric) {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}
