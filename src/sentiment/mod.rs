//! Sentiment analysis
//!
//! - Lexicon of word valences, boosters and negations
//! - Rule-based polarity analyzer producing a compound score
//! - Three-way classification and tallying

mod analyzer;
mod classifier;
mod lexicon;

pub use analyzer::{normalize_score, PolarityAnalyzer, PolarityScores};
pub use classifier::{
    Polarity, ScoredComment, SentimentClassifier, SentimentTally, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD,
};
pub use lexicon::{EnglishLexicon, SentimentLexicon};
