use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring engine configuration. Lexicon weights are compiled in and not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Entries with more words than this that match nothing get the fallback ladder.
    pub degenerate_word_threshold: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            degenerate_word_threshold: defaults::DEFAULT_DEGENERATE_WORD_THRESHOLD,
        }
    }
}
