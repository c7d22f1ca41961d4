//! End-to-end analysis run
//!
//! load → non-null comments → normalize → count → frequency CSV → word cloud
//! → classify → chart → optional summary
//!
//! Every input check happens before the first artifact is written.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::data::CommentLoader;
use crate::error::Result;
use crate::nlp::{FrequencyTable, TextNormalizer};
use crate::report::{write_frequency_csv, write_summary, RunSummary, SentimentChart, WordCloudRenderer};
use crate::sentiment::{EnglishLexicon, PolarityAnalyzer, SentimentClassifier};
use crate::utils::AppConfig;

/// Default number of top words kept in the run summary
const SUMMARY_TOP_WORDS: usize = 20;

/// Runs the full comment analysis with one configuration
#[derive(Debug, Clone)]
pub struct CommentPipeline {
    config: AppConfig,
    loader: CommentLoader,
    normalizer: TextNormalizer,
    classifier: SentimentClassifier,
    word_cloud: WordCloudRenderer,
    chart: SentimentChart,
    top_words: usize,
}

impl CommentPipeline {
    /// Build a pipeline; loads the extra lexicon if one is configured
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut lexicon = EnglishLexicon::new();
        if let Some(path) = &config.sentiment.extra_lexicon {
            let added = lexicon.extend_from_path(path)?;
            info!(entries = added, path = %path.display(), "Loaded extra lexicon");
        }

        Ok(Self {
            loader: CommentLoader::new(config.input.column.clone()),
            normalizer: TextNormalizer::new(),
            classifier: SentimentClassifier::with_analyzer(PolarityAnalyzer::with_lexicon(lexicon)),
            word_cloud: WordCloudRenderer::from_settings(&config.word_cloud),
            chart: SentimentChart::new()?,
            top_words: SUMMARY_TOP_WORDS,
            config,
        })
    }

    /// Set how many of the most frequent words the summary keeps
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Analyze one CSV file and write every artifact
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<RunSummary> {
        let input = input.as_ref();
        info!(input = %input.display(), column = %self.loader.column(), "Starting analysis");

        let column = self.loader.load(input)?;
        let comments = column.non_null()?;
        debug!(rows = column.len(), non_null = comments.len(), "Extracted comments");

        let output = &self.config.output;
        std::fs::create_dir_all(&output.directory)?;

        let tokens = self.normalizer.normalize(&comments);
        let table = FrequencyTable::from_tokens(&tokens);
        info!(tokens = tokens.len(), distinct = table.len(), "Counted word frequencies");
        if table.is_empty() {
            warn!("No words left after normalization; word cloud will be blank");
        }

        let frequency_file = output.frequency_path();
        write_frequency_csv(&table, &frequency_file)?;

        let word_cloud_file = output.word_cloud_path();
        let placed = self.word_cloud.render_to_file(&table, &word_cloud_file)?;

        let scored = self.classifier.score(&comments);
        let tally = self.classifier.classify(&comments);
        info!(
            positive = tally.positive,
            neutral = tally.neutral,
            negative = tally.negative,
            "Classified comments"
        );

        let chart_file = output.chart_path();
        self.chart.render_to_file(&tally, &chart_file)?;

        let (most_positive, most_negative) = RunSummary::extremes(&scored);
        let summary = RunSummary {
            input: input.to_path_buf(),
            column: column.name.clone(),
            rows_loaded: column.len(),
            non_null_comments: comments.len(),
            valid_comments: scored.len(),
            token_count: tokens.len(),
            distinct_tokens: table.len(),
            top_words: table.top(self.top_words).to_vec(),
            tally,
            most_positive,
            most_negative,
            frequency_file,
            word_cloud_file,
            words_drawn: placed.len(),
            chart_file,
        };

        if let Some(path) = output.summary_path() {
            write_summary(&summary, path)?;
        }

        Ok(summary)
    }
}
