mod analytics;
mod contradiction;
mod emotion;
mod sentiment_result;

pub use analytics::{DatedSentiment, MoodAnalytics, TrendPoint};
pub use contradiction::{ContradictionNotice, PriorEntry, ShiftKind};
pub use emotion::Emotion;
pub use sentiment_result::SentimentResult;
