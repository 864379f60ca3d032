//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_timetravel::{AppConfig, MoveOrder};

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strictly_timetravel.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(
        f,
        r#"
move_order = "descending"
log_filter = "strictly_timetravel=debug"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert_eq!(config.log_filter(), "strictly_timetravel=debug");
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_from_file_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "move_order = [").unwrap();

    let err = AppConfig::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
