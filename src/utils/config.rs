//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input settings
    pub input: InputSettings,
    /// Output settings
    pub output: OutputSettings,
    /// Word cloud layout settings
    pub word_cloud: WordCloudSettings,
    /// Sentiment lexicon settings
    pub sentiment: SentimentSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Input-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Name of the free-text column
    pub column: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            column: "comments".to_string(),
        }
    }
}

/// Output-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory all artifacts are written to
    pub directory: PathBuf,
    /// Word frequency table file name
    pub frequency_file: String,
    /// Word cloud image file name
    pub word_cloud_file: String,
    /// Sentiment bar chart file name
    pub chart_file: String,
    /// Optional JSON run summary file name
    pub summary_file: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            frequency_file: "word_frequency.csv".to_string(),
            word_cloud_file: "word_cloud.png".to_string(),
            chart_file: "sentiment_chart.png".to_string(),
            summary_file: None,
        }
    }
}

impl OutputSettings {
    pub fn frequency_path(&self) -> PathBuf {
        self.directory.join(&self.frequency_file)
    }

    pub fn word_cloud_path(&self) -> PathBuf {
        self.directory.join(&self.word_cloud_file)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.directory.join(&self.chart_file)
    }

    pub fn summary_path(&self) -> Option<PathBuf> {
        self.summary_file
            .as_ref()
            .map(|name| self.directory.join(name))
    }
}

/// Word cloud layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudSettings {
    /// Maximum number of words drawn
    pub max_words: usize,
    /// Seed for placement and colors
    pub seed: u64,
    /// Largest glyph scale (multiples of 8 px)
    pub max_font_scale: u32,
    /// How strongly word size follows frequency (0.0 - 1.0)
    pub relative_scaling: f64,
}

impl Default for WordCloudSettings {
    fn default() -> Self {
        Self {
            max_words: 200,
            seed: 42,
            max_font_scale: 8,
            relative_scaling: 0.5,
        }
    }
}

/// Sentiment lexicon settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentSettings {
    /// Tab-separated `word<TAB>valence` file merged over the built-in lexicon
    pub extra_lexicon: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Save configuration to file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let content = match ext {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content).map_err(|e| ConfigError::FileError(e.to_string()))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Config file error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Config serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}
