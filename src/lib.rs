//! # Comment Sentiment
//!
//! Word frequency, word cloud and lexicon-based sentiment analysis for CSV
//! comment exports.
//!
//! ## Modules
//!
//! - `data` - Typed cells and the CSV comment loader
//! - `nlp` - Tokenization, normalization and frequency counting
//! - `sentiment` - Lexicon, polarity analyzer and three-way classifier
//! - `report` - Frequency CSV, word cloud, bar chart and run summary
//! - `pipeline` - End-to-end run over one input file
//! - `utils` - Configuration and logging
//!
//! ## Example Usage
//!
//! ```no_run
//! use comment_sentiment::{AppConfig, CommentPipeline};
//!
//! fn main() -> comment_sentiment::Result<()> {
//!     let pipeline = CommentPipeline::new(AppConfig::default())?;
//!     let summary = pipeline.run("comments.csv")?;
//!
//!     println!("{}", summary.tally);
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use data::{Cell, ColumnKind, CommentColumn, CommentLoader};
pub use error::{Error, Result};
pub use nlp::{FrequencyTable, TextNormalizer, Tokenizer, WordCount};
pub use pipeline::CommentPipeline;
pub use report::{RunSummary, SentimentChart, WordCloudRenderer};
pub use sentiment::{
    EnglishLexicon, Polarity, PolarityAnalyzer, PolarityScores, SentimentClassifier, SentimentLexicon,
    SentimentTally,
};
pub use utils::{load_config, AppConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
