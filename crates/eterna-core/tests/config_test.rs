use std::collections::HashMap;

use eterna_core::config::*;
use eterna_core::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EternaConfig::from_toml("").unwrap();

    assert_eq!(config.sentiment.degenerate_word_threshold, 10);
    assert_eq!(config.shift.threshold, 1.5);
    assert_eq!(config.shift.window, 5);
    assert_eq!(config.analytics.trend_window, 14);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[shift]
threshold = 1.2

[observability]
log_level = "debug"
"#;
    let config = EternaConfig::from_toml(toml).unwrap();
    assert_eq!(config.shift.threshold, 1.2);
    // Non-overridden fields keep defaults
    assert_eq!(config.shift.window, 5);
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json);
}

#[test]
fn config_ignores_unknown_sections() {
    let config = EternaConfig::from_toml("[lexicon]\njoy = 12\n").unwrap();
    assert_eq!(config, EternaConfig::default());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = EternaConfig::from_toml("[shift\nthreshold = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let err = EternaConfig::from_toml("[shift]\nwindow = \"five\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_non_positive_threshold() {
    let mut config = EternaConfig::default();
    config.shift.threshold = 0.0;
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "shift.threshold"),
        other => panic!("unexpected error: {other}"),
    }

    config.shift.threshold = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_windows() {
    let mut config = EternaConfig::default();
    config.shift.window = 0;
    assert!(config.validate().is_err());

    let mut config = EternaConfig::default();
    config.analytics.trend_window = 0;
    assert!(config.validate().is_err());
}

#[test]
fn overrides_apply_parseable_values_only() {
    let vars: HashMap<&str, &str> = [
        ("SHIFT_THRESHOLD", "1.8"),
        ("SHIFT_WINDOW", "not-a-number"),
        ("LOG_LEVEL", "eterna=trace"),
        ("JSON_LOGS", "false"),
    ]
    .into_iter()
    .collect();

    let mut config = EternaConfig::default();
    config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(config.shift.threshold, 1.8);
    assert_eq!(config.shift.window, 5);
    assert_eq!(config.observability.log_level, "eterna=trace");
    assert!(!config.observability.json);
}

#[test]
fn load_with_missing_explicit_path_fails() {
    let err = EternaConfig::load(Some(std::path::Path::new(
        "/definitely/not/here/eterna.toml",
    )))
    .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_toml_roundtrip() {
    let mut config = EternaConfig::default();
    config.analytics.trend_window = 30;
    let text = config.to_toml().unwrap();
    let back = EternaConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::ValidationFailed {
        field: "shift.window".into(),
        message: "must be at least 1".into(),
    };
    assert_eq!(
        err.to_string(),
        "config validation failed for shift.window: must be at least 1"
    );
}
