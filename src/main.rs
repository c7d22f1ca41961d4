//! Comment Sentiment CLI
//!
//! Analyzes the free-text column of a CSV export: word frequencies, a word
//! cloud and a positive/neutral/negative breakdown.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use comment_sentiment::utils::{load_config, save_config, setup_logging, AppConfig};
use comment_sentiment::{CommentPipeline, Error};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "comment_sentiment")]
#[command(about = "Word frequency and sentiment analysis for CSV comments", long_about = None)]
struct Cli {
    /// CSV file to analyze
    input: PathBuf,

    /// Name of the free-text column
    #[arg(short, long)]
    column: Option<String>,

    /// Directory for the generated files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file (TOML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write a JSON run summary with this file name
    #[arg(long)]
    summary: Option<String>,

    /// Print the N most frequent words
    #[arg(short, long)]
    top: Option<usize>,

    /// Maximum number of words in the word cloud
    #[arg(long)]
    max_words: Option<usize>,

    /// Seed for the word cloud layout
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Write the effective configuration to this file (TOML or JSON)
    #[arg(long)]
    save_config: Option<PathBuf>,
}

impl Cli {
    /// Configuration file values with command line overrides applied
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(column) = &self.column {
            config.input.column = column.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(summary) = &self.summary {
            config.output.summary_file = Some(summary.clone());
        }
        if let Some(max_words) = self.max_words {
            config.word_cloud.max_words = max_words;
        }
        if let Some(seed) = self.seed {
            config.word_cloud.seed = seed;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.app_config()?;
    setup_logging(&config.logging.level)?;
    debug!(?config, "Effective configuration");

    if let Some(path) = &cli.save_config {
        save_config(&config, path)
            .with_context(|| format!("Failed to save configuration to {}", path.display()))?;
        info!(path = %path.display(), "Saved effective configuration");
    }

    let mut pipeline = CommentPipeline::new(config)?;
    if let Some(n) = cli.top {
        pipeline = pipeline.with_top_words(n);
    }
    let summary = pipeline.run(&cli.input)?;

    println!("Word frequency table saved to {}", summary.frequency_file.display());
    println!("Word cloud saved to {}", summary.word_cloud_file.display());
    println!("Sentiment chart saved to {}", summary.chart_file.display());
    if let Some(path) = pipeline.config().output.summary_path() {
        println!("Run summary saved to {}", path.display());
    }

    if let Some(n) = cli.top {
        println!("\nTop {} words:", n);
        for (rank, entry) in summary.top_words.iter().enumerate() {
            println!("{:>4}. {:<20} {}", rank + 1, entry.word, entry.count);
        }
    }

    println!("\nSentiment Analysis Summary:");
    println!("{}", summary.tally);

    info!(comments = summary.valid_comments, "Analysis complete");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            // Input problems exit with 2, everything else with 1
            match err.downcast_ref::<Error>() {
                Some(e) if e.is_input_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
