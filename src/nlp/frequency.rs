//! Token frequency table

use std::collections::HashMap;

use serde::Serialize;

/// A distinct token with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "Frequency")]
    pub count: usize,
}

/// Occurrence counts ordered from most to least frequent.
///
/// Equal counts keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    total: usize,
}

impl FrequencyTable {
    /// Count tokens
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match index.get(token) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(token, entries.len());
                    entries.push(WordCount {
                        word: token.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // Stable sort keeps first-seen order among ties
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            entries,
            total: tokens.len(),
        }
    }

    /// All entries, most frequent first
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// The `n` most frequent entries
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count for one token
    pub fn count(&self, word: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map_or(0, |e| e.count)
    }

    /// Highest count in the table
    pub fn max_count(&self) -> usize {
        self.entries.first().map_or(0, |e| e.count)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
