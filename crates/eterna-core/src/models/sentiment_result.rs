use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Emotion;
use crate::constants::{DEFAULT_FEEDBACK, DEFAULT_OVERALL_SCORE, MAX_PERCENTAGE};

/// Emotion distribution for a single journal entry.
///
/// The four emotion percentages and `neutral` are not required to sum to 100:
/// each percentage is rounded independently and `neutral` is the floor-clamped
/// residual. Serialized with camelCase keys; this shape is the storage contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub joy: u8,
    pub sadness: u8,
    pub anxiety: u8,
    pub anger: u8,
    pub neutral: u8,
    /// Signed balance of joy against sadness + anger, two decimals.
    pub overall_score: String,
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
}

impl SentimentResult {
    /// The record substituted whenever stored sentiment cannot be decoded.
    pub fn canonical_default() -> Self {
        Self {
            joy: 0,
            sadness: 0,
            anxiety: 0,
            anger: 0,
            neutral: MAX_PERCENTAGE,
            overall_score: DEFAULT_OVERALL_SCORE.to_string(),
            feedback: DEFAULT_FEEDBACK.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn percentage(&self, emotion: Emotion) -> u8 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anxiety => self.anxiety,
            Emotion::Anger => self.anger,
        }
    }

    /// Sum of the four tracked percentages (neutral excluded).
    pub fn emotion_total(&self) -> u32 {
        Emotion::ALL
            .iter()
            .map(|e| u32::from(self.percentage(*e)))
            .sum()
    }

    /// Highest-percentage emotion, first-wins on ties in [`Emotion::ALL`] order.
    /// `None` when every percentage is zero.
    pub fn dominant(&self) -> Option<Emotion> {
        Emotion::dominant_of(Emotion::ALL.map(|e| self.percentage(e)))
    }

    /// Numeric overall score. `None` when the stored string is not a finite number.
    pub fn overall_value(&self) -> Option<f64> {
        self.overall_score
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Equality on everything except `timestamp`.
    pub fn same_scores(&self, other: &Self) -> bool {
        self.joy == other.joy
            && self.sadness == other.sadness
            && self.anxiety == other.anxiety
            && self.anger == other.anger
            && self.neutral == other.neutral
            && self.overall_score == other.overall_score
            && self.feedback == other.feedback
    }
}
