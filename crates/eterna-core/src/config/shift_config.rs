use serde::{Deserialize, Serialize};

use super::defaults;

/// Mood-shift detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    /// Absolute overall-score difference that must be exceeded to flag a shift.
    pub threshold: f64,
    /// Number of most-recent prior entries compared against.
    pub window: usize,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_SHIFT_THRESHOLD,
            window: defaults::DEFAULT_SHIFT_WINDOW,
        }
    }
}
