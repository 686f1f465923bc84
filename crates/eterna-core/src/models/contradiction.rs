use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SentimentResult;

/// A flagged swing in overall score between a new entry and a recent prior entry.
/// Computed when an entry is saved; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionNotice {
    pub kind: ShiftKind,
    pub referenced_entry_id: String,
    pub message: String,
    pub referenced_entry_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftKind {
    /// Overall score moved further than the shift threshold.
    EmotionalShift,
}

/// A previously saved entry, as supplied by the persistence collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: SentimentResult,
}

impl PriorEntry {
    pub fn new(id: impl Into<String>, timestamp: DateTime<Utc>, sentiment: SentimentResult) -> Self {
        Self {
            id: id.into(),
            timestamp,
            sentiment,
        }
    }
}
