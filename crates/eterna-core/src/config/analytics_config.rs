use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Number of latest entries included in the mood trend.
    pub trend_window: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_window: defaults::DEFAULT_TREND_WINDOW,
        }
    }
}
