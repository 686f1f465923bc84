//! Top-level Eterna configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, AnalyticsConfig, ObservabilityConfig, SentimentConfig, ShiftConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ETERNA_*`)
/// 2. Config file (`eterna.toml`, or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EternaConfig {
    pub sentiment: SentimentConfig,
    pub shift: ShiftConfig,
    pub analytics: AnalyticsConfig,
    pub observability: ObservabilityConfig,
}

impl EternaConfig {
    /// Load configuration from `path` (if given) and the environment, then validate.
    ///
    /// A missing explicit path is an error. With `None`, `eterna.toml` in the
    /// working directory is used when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let local = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.shift.threshold.is_finite() || self.shift.threshold <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "shift.threshold".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if self.shift.window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "shift.window".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.analytics.trend_window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "analytics.trend_window".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `ETERNA_*` environment variables. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(format!("{}{key}", defaults::ENV_PREFIX)).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Keys are the env suffixes
    /// (`SHIFT_THRESHOLD`, `LOG_LEVEL`, ...).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DEGENERATE_WORD_THRESHOLD").and_then(|s| s.parse().ok()) {
            self.sentiment.degenerate_word_threshold = v;
        }
        if let Some(v) = lookup("SHIFT_THRESHOLD").and_then(|s| s.parse().ok()) {
            self.shift.threshold = v;
        }
        if let Some(v) = lookup("SHIFT_WINDOW").and_then(|s| s.parse().ok()) {
            self.shift.window = v;
        }
        if let Some(v) = lookup("TREND_WINDOW").and_then(|s| s.parse().ok()) {
            self.analytics.trend_window = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = lookup("JSON_LOGS").and_then(|s| s.parse().ok()) {
            self.observability.json = v;
        }
    }
}
