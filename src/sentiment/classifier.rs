//! Three-way sentiment classification of comments

use std::fmt;

use serde::{Deserialize, Serialize};

use super::analyzer::PolarityAnalyzer;
use super::lexicon::{EnglishLexicon, SentimentLexicon};
use crate::data::Cell;

/// Compound scores above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// All polarities in reporting order
    pub const ALL: [Polarity; 3] = [Polarity::Positive, Polarity::Neutral, Polarity::Negative];

    /// Bucket a compound score.
    ///
    /// Scores exactly on a threshold are neutral.
    pub fn from_compound(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Polarity::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Neutral => "Neutral",
            Polarity::Negative => "Negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-class comment counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentTally {
    /// Count one classified comment
    pub fn record(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Positive => self.positive += 1,
            Polarity::Neutral => self.neutral += 1,
            Polarity::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Neutral => self.neutral,
            Polarity::Negative => self.negative,
        }
    }

    /// Number of classified comments
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

impl fmt::Display for SentimentTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Positive: {}\nNeutral: {}\nNegative: {}",
            self.positive, self.neutral, self.negative
        )
    }
}

/// A comment with its compound score and class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredComment {
    pub text: String,
    pub compound: f64,
    pub polarity: Polarity,
}

/// Classifies comments with a polarity analyzer and fixed thresholds
#[derive(Debug, Clone)]
pub struct SentimentClassifier<L = EnglishLexicon> {
    analyzer: PolarityAnalyzer<L>,
}

impl<L: SentimentLexicon> SentimentClassifier<L> {
    pub fn with_analyzer(analyzer: PolarityAnalyzer<L>) -> Self {
        Self { analyzer }
    }

    /// Classify one text
    pub fn classify_text(&self, text: &str) -> Polarity {
        Polarity::from_compound(self.analyzer.polarity_scores(text).compound)
    }

    /// Score every valid string cell, in row order
    pub fn score(&self, cells: &[Cell]) -> Vec<ScoredComment> {
        cells
            .iter()
            .filter_map(Cell::as_text)
            .map(|text| {
                let compound = self.analyzer.polarity_scores(text).compound;
                ScoredComment {
                    text: text.to_string(),
                    compound,
                    polarity: Polarity::from_compound(compound),
                }
            })
            .collect()
    }

    /// Tally every valid string cell; other cells count nowhere
    pub fn classify(&self, cells: &[Cell]) -> SentimentTally {
        let mut tally = SentimentTally::default();
        for text in cells.iter().filter_map(Cell::as_text) {
            tally.record(self.classify_text(text));
        }
        tally
    }
}

impl SentimentClassifier<EnglishLexicon> {
    pub fn new() -> Self {
        Self {
            analyzer: PolarityAnalyzer::new(),
        }
    }
}

impl Default for SentimentClassifier<EnglishLexicon> {
    fn default() -> Self {
        Self::new()
    }
}
