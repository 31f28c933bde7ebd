use std::fs;
use std::time::Duration;

use nibbo::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.tracking_interval(), Duration::from_secs(1));
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[support]
rider_phone = "+2348031234567"

[ui]
tracking_interval_ms = 200
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.support.rider_phone, "+2348031234567");
    assert_eq!(config.support.whatsapp_number, "+2348000000000");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.tracking_interval(), Duration::from_millis(200));
}

#[test]
fn zero_interval_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntracking_interval_ms = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn short_support_number_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[support]\nwhatsapp_number = \"+234 80\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("support.whatsapp_number"));
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
