//! Utility modules

mod config;
mod logging;

pub use config::{
    load_config, save_config, AppConfig, ConfigError, InputSettings, LoggingSettings,
    OutputSettings, SentimentSettings, WordCloudSettings,
};
pub use logging::setup_logging;
