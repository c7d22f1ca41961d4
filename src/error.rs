//! Error types for the comment sentiment library

use std::path::PathBuf;

use thiserror::Error;

use crate::utils::ConfigError;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("The file '{}' was not found.", .0.display())]
    InputNotFound(PathBuf),

    /// Input file exists but could not be parsed as CSV
    #[error("Could not read the CSV file: {0}")]
    InputUnreadable(String),

    /// Required text column is not in the header
    #[error("The CSV file does not contain a '{0}' column.")]
    MissingColumn(String),

    /// Required text column has no values once nulls are dropped
    #[error("The '{0}' column is empty or contains no valid data.")]
    EmptyColumn(String),

    /// Lexicon file could not be parsed
    #[error("Invalid lexicon entry at line {line}: {reason}")]
    InvalidLexicon { line: usize, reason: String },

    /// Invalid color literal
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Check if the error was raised while validating the input file,
    /// before anything was written
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound(_)
                | Error::InputUnreadable(_)
                | Error::MissingColumn(_)
                | Error::EmptyColumn(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        let err = Error::MissingColumn("comments".to_string());
        assert_eq!(
            err.to_string(),
            "The CSV file does not contain a 'comments' column."
        );

        let err = Error::EmptyColumn("comments".to_string());
        assert_eq!(
            err.to_string(),
            "The 'comments' column is empty or contains no valid data."
        );

        let err = Error::InputNotFound(PathBuf::from("data/missing.csv"));
        assert_eq!(err.to_string(), "The file 'data/missing.csv' was not found.");
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::InputUnreadable("bad row".to_string()).is_input_error());
        assert!(!Error::InvalidColor("#zz".to_string()).is_input_error());
    }
}
