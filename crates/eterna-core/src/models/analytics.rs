use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SentimentResult;

/// A stored sentiment paired with the creation time of its entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSentiment {
    pub created_at: DateTime<Utc>,
    pub sentiment: SentimentResult,
}

/// Aggregate mood view over a user's entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalytics {
    pub total_entries: u32,
    pub avg_joy: u8,
    pub avg_sadness: u8,
    pub avg_anxiety: u8,
    pub avg_anger: u8,
    pub trend: Vec<TrendPoint>,
    pub insights: Vec<String>,
}

impl MoodAnalytics {
    pub fn empty() -> Self {
        Self {
            total_entries: 0,
            avg_joy: 0,
            avg_sadness: 0,
            avg_anxiety: 0,
            avg_anger: 0,
            trend: Vec::new(),
            insights: Vec::new(),
        }
    }
}

/// One point of the recent mood trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: f64,
    pub joy: u8,
    pub sadness: u8,
    pub anxiety: u8,
}
