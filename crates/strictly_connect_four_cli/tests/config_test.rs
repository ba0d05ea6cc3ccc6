//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_connect_four::Token;
use strictly_connect_four_cli::GameConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    writeln!(file, "rows = 8\ncols = 9\ntoken0 = \"green\"\ntoken1 = \"orange\"").unwrap();

    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.rows(), 8);
    assert_eq!(*config.cols(), 9);
    assert_eq!(*config.token0(), Some(Token::Green));
    assert_eq!(*config.token1(), Some(Token::Orange));
}

#[test]
fn test_missing_file_reports_error() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
