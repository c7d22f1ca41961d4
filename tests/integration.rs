//! End-to-end tests over real files

use std::fs;
use std::path::{Path, PathBuf};

use comment_sentiment::nlp::is_stopword;
use comment_sentiment::{AppConfig, Cell, CommentPipeline, Error, SentimentClassifier, TextNormalizer};
use image::GenericImageView;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn pipeline_into(out: &Path) -> CommentPipeline {
    let mut config = AppConfig::default();
    config.output.directory = out.to_path_buf();
    CommentPipeline::new(config).unwrap()
}

#[test]
fn test_mixed_comments_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "comments.csv",
        "id,comments\n1,I love this!\n2,\"\"\n3,\n4,Terrible experience.\n",
    );
    let out = dir.path().join("out");

    let summary = pipeline_into(&out).run(&input).unwrap();

    assert_eq!(summary.rows_loaded, 4);
    assert_eq!(summary.tally.total(), 2);
    assert_eq!(summary.tally.positive, 1);
    assert_eq!(summary.tally.negative, 1);

    let csv = fs::read_to_string(out.join("word_frequency.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Word,Frequency"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows, vec!["love,1", "terrible,1", "experience,1"]);
}

#[test]
fn test_cell_level_scenario() {
    let cells = vec![
        Cell::Text("I love this!".to_string()),
        Cell::Text(String::new()),
        Cell::Missing,
        Cell::Text("Terrible experience.".to_string()),
    ];

    let tokens = TextNormalizer::new().normalize(&cells);
    assert_eq!(tokens, vec!["love", "terrible", "experience"]);

    let tally = SentimentClassifier::new().classify(&cells);
    assert_eq!(tally.total(), 2);
}

#[test]
fn test_whitespace_only_comment_counts_as_neutral() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.csv", "comments\nI love this\n\"   \"\n");
    let out = dir.path().join("out");

    let summary = pipeline_into(&out).run(&input).unwrap();

    assert_eq!(summary.non_null_comments, 2);
    assert_eq!(summary.valid_comments, 2);
    assert_eq!(summary.tally.positive, 1);
    assert_eq!(summary.tally.neutral, 1);
    assert_eq!(summary.tally.total(), summary.non_null_comments);
    assert_eq!(summary.token_count, 1);
}

#[test]
fn test_missing_column_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.csv", "id,feedback\n1,Great app\n");
    let out = dir.path().join("out");

    let err = pipeline_into(&out).run(&input).unwrap_err();

    assert!(matches!(err, Error::MissingColumn(ref c) if c == "comments"));
    assert_eq!(err.to_string(), "The CSV file does not contain a 'comments' column.");
    assert!(!out.join("word_frequency.csv").exists());
    assert!(!out.join("word_cloud.png").exists());
    assert!(!out.join("sentiment_chart.png").exists());
}

#[test]
fn test_all_null_column_is_empty_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.csv", "id,comments\n1,\n2,NA\n3,\n");
    let out = dir.path().join("out");

    let err = pipeline_into(&out).run(&input).unwrap_err();

    assert!(matches!(err, Error::EmptyColumn(_)));
    assert_eq!(
        err.to_string(),
        "The 'comments' column is empty or contains no valid data."
    );
    assert!(!out.exists());
}

#[test]
fn test_missing_file_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.csv");

    let err = pipeline_into(&dir.path().join("out")).run(&input).unwrap_err();

    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(err.is_input_error());
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn test_empty_file_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.csv", "");

    let err = pipeline_into(&dir.path().join("out")).run(&input).unwrap_err();
    assert!(matches!(err, Error::InputUnreadable(_)));
}

#[test]
fn test_numeric_column_yields_no_valid_comments() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.csv", "comments\n1\n2.5\n3\n");
    let out = dir.path().join("out");

    let summary = pipeline_into(&out).run(&input).unwrap();

    assert_eq!(summary.non_null_comments, 3);
    assert_eq!(summary.valid_comments, 0);
    assert_eq!(summary.tally.total(), 0);
    assert_eq!(
        fs::read_to_string(out.join("word_frequency.csv")).unwrap(),
        "Word,Frequency\n"
    );
}

#[test]
fn test_frequency_csv_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "comments.csv",
        "comments\n\"Shipping was slow, support was slow too\"\nGreat price\nPrice too high; shipping slow\n",
    );
    let out = dir.path().join("out");
    let pipeline = pipeline_into(&out);

    pipeline.run(&input).unwrap();
    let first = fs::read(out.join("word_frequency.csv")).unwrap();
    let first_cloud = fs::read(out.join("word_cloud.png")).unwrap();

    pipeline.run(&input).unwrap();
    let second = fs::read(out.join("word_frequency.csv")).unwrap();
    let second_cloud = fs::read(out.join("word_cloud.png")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_cloud, second_cloud);
    assert!(String::from_utf8(first).unwrap().starts_with("Word,Frequency\nslow,3\n"));
}

#[test]
fn test_counts_and_tally_are_consistent() {
    let dir = TempDir::new().unwrap();
    let comments = [
        "The checkout keeps crashing",
        "Really helpful staff, thank you!",
        "It's fine I guess",
        "Not good. Not bad.",
        "WORST update ever!!!",
        "Delivery arrived on Tuesday",
    ];
    let mut contents = String::from("comments\n");
    for comment in comments {
        contents.push_str(&format!("\"{}\"\n", comment));
    }
    let input = write_input(&dir, "comments.csv", &contents);
    let out = dir.path().join("out");

    let summary = pipeline_into(&out).run(&input).unwrap();
    assert_eq!(summary.tally.total(), comments.len());
    assert_eq!(summary.valid_comments, comments.len());

    let mut reader = csv::Reader::from_path(out.join("word_frequency.csv")).unwrap();
    let mut total = 0;
    let mut previous = usize::MAX;
    for record in reader.records() {
        let record = record.unwrap();
        let word = &record[0];
        let count: usize = record[1].parse().unwrap();

        assert!(word.chars().all(char::is_alphanumeric), "{}", word);
        assert!(!is_stopword(word), "{}", word);
        assert_eq!(word, word.to_lowercase());
        assert!(count <= previous);

        previous = count;
        total += count;
    }
    assert_eq!(total, summary.token_count);
}

#[test]
fn test_images_have_fixed_sizes() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.csv", "comments\nLove the new design\n");
    let out = dir.path().join("out");

    pipeline_into(&out).run(&input).unwrap();

    let cloud = image::open(out.join("word_cloud.png")).unwrap();
    let chart = image::open(out.join("sentiment_chart.png")).unwrap();
    assert_eq!(cloud.dimensions(), (800, 400));
    assert_eq!(chart.dimensions(), (800, 600));
}
