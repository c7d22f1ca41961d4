//! JSON run summary

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::nlp::WordCount;
use crate::sentiment::{ScoredComment, SentimentTally};

/// Everything one run computed and wrote
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub column: String,
    /// Data rows in the file
    pub rows_loaded: usize,
    pub non_null_comments: usize,
    /// Comments that were non-empty text
    pub valid_comments: usize,
    pub token_count: usize,
    pub distinct_tokens: usize,
    pub top_words: Vec<WordCount>,
    pub tally: SentimentTally,
    pub most_positive: Option<ScoredComment>,
    pub most_negative: Option<ScoredComment>,
    pub frequency_file: PathBuf,
    pub word_cloud_file: PathBuf,
    pub words_drawn: usize,
    pub chart_file: PathBuf,
}

impl RunSummary {
    /// Pick the highest and lowest scoring comments
    pub fn extremes(scored: &[ScoredComment]) -> (Option<ScoredComment>, Option<ScoredComment>) {
        let most_positive = scored
            .iter()
            .filter(|c| c.compound > 0.0)
            .fold(None::<&ScoredComment>, |best, c| match best {
                Some(b) if b.compound >= c.compound => Some(b),
                _ => Some(c),
            })
            .cloned();

        let most_negative = scored
            .iter()
            .filter(|c| c.compound < 0.0)
            .fold(None::<&ScoredComment>, |best, c| match best {
                Some(b) if b.compound <= c.compound => Some(b),
                _ => Some(c),
            })
            .cloned();

        (most_positive, most_negative)
    }
}

/// Save the summary as pretty-printed JSON
pub fn write_summary<P: AsRef<Path>>(summary: &RunSummary, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;

    info!(path = %path.display(), "Saved run summary");
    Ok(())
}
