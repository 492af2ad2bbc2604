use std::fs;
use std::path::PathBuf;

use quizterm::config::{Config, ConfigError, ConfigStore};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.timeout_seconds, 30);
    assert!(config.quiz.auto_advance);
}

#[test]
fn partial_file_is_filled_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[source]
endpoint_url = "https://quiz.example.com/api/questions"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.source.endpoint_url,
        "https://quiz.example.com/api/questions"
    );
    assert_eq!(config.source.connect_timeout_seconds, 5);
    assert_eq!(config.quiz.auto_advance_delay_ms, 2000);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "this is not toml = =");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_endpoint_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[source]
endpoint_url = "ftp://quiz.example.com/questions"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[source]
timeout_seconds = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_connect_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[source]
connect_timeout_seconds = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_auto_advance_delay_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[quiz]
auto_advance = true
auto_advance_delay_ms = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn store_reload_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[quiz]
auto_advance_delay_ms = 1500
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let store = ConfigStore::new(config, path.clone());
    assert_eq!(store.get().quiz.auto_advance_delay_ms, 1500);

    fs::write(
        &path,
        r#"
[quiz]
auto_advance_delay_ms = 500
"#,
    )
    .unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().quiz.auto_advance_delay_ms, 500);
}

#[test]
fn failed_reload_keeps_previous_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[quiz]
auto_advance_delay_ms = 1500
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let store = ConfigStore::new(config, path.clone());

    fs::write(&path, "not valid toml = =").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().quiz.auto_advance_delay_ms, 1500);
}
