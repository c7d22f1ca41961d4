//! Command line behaviour of the binary

use std::fs;
use std::process::Command;

use comment_sentiment::load_config;
use tempfile::TempDir;

fn command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_comment_sentiment"))
}

#[test]
fn test_prints_tally_on_success() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("comments.csv");
    fs::write(&input, "comments\nI love this!\nTerrible experience.\n").unwrap();

    let output = command()
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Positive: 1\nNeutral: 0\nNegative: 1"), "{}", stdout);
}

#[test]
fn test_input_error_exits_with_status_two() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.csv");

    let output = command()
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: The file '"), "{}", stderr);
    assert!(stderr.contains("missing.csv' was not found."), "{}", stderr);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_save_config_writes_effective_settings() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("feedback.csv");
    fs::write(&input, "feedback\nQuick delivery\n").unwrap();
    let saved = dir.path().join("effective.toml");

    let output = command()
        .arg(&input)
        .args(["--column", "feedback", "--seed", "7", "--max-words", "50"])
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .arg("--save-config")
        .arg(&saved)
        .output()
        .unwrap();

    assert!(output.status.success());
    let config = load_config(&saved).unwrap();
    assert_eq!(config.input.column, "feedback");
    assert_eq!(config.word_cloud.seed, 7);
    assert_eq!(config.word_cloud.max_words, 50);
}
