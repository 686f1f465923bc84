//! Mood analytics over a user's entries: per-emotion averages, a recent
//! trend, and canned insight lines.

use eterna_core::config::AnalyticsConfig;
use eterna_core::models::{DatedSentiment, MoodAnalytics, TrendPoint};
use eterna_core::Emotion;
use eterna_observability::analytics_span;

pub const POSITIVE_TREND_INSIGHT: &str = "Your overall mood trend is positive! Keep it up!";
pub const SEEK_JOY_INSIGHT: &str = "Consider activities that bring you joy and peace.";
pub const HIGH_ANXIETY_INSIGHT: &str = "Try mindfulness exercises or meditation to manage anxiety.";
pub const MANAGED_ANXIETY_INSIGHT: &str = "Your anxiety levels are well-managed. Good work!";
pub const HIGH_SADNESS_INSIGHT: &str =
    "Consider reaching out to friends, family, or a professional for support.";

/// Mean percentage above which an emotion counts as high.
pub const HIGH_AVERAGE: f64 = 50.0;

/// Summarize entries given in chronological order.
pub fn summarize(entries: &[DatedSentiment], config: &AnalyticsConfig) -> MoodAnalytics {
    let _span = analytics_span!(entries.len()).entered();

    if entries.is_empty() {
        return MoodAnalytics::empty();
    }

    let means = Emotion::ALL.map(|e| mean_of(entries, e));
    let [joy, sadness, anxiety, anger] = means;

    let trend_start = entries.len().saturating_sub(config.trend_window);
    let trend: Vec<TrendPoint> = entries[trend_start..].iter().map(trend_point).collect();

    let analytics = MoodAnalytics {
        total_entries: entries.len() as u32,
        avg_joy: round_percentage(joy),
        avg_sadness: round_percentage(sadness),
        avg_anxiety: round_percentage(anxiety),
        avg_anger: round_percentage(anger),
        trend,
        insights: insights(joy, sadness, anxiety, entries.len()),
    };
    tracing::debug!(
        entries = entries.len(),
        trend_points = analytics.trend.len(),
        "mood analytics computed"
    );
    analytics
}

/// Insight lines from unrounded means.
pub fn insights(
    avg_joy: f64,
    avg_sadness: f64,
    avg_anxiety: f64,
    total_entries: usize,
) -> Vec<String> {
    let mut lines = vec![format!(
        "You've been journaling for {total_entries} days. Great consistency!"
    )];
    lines.push(
        if avg_joy > HIGH_AVERAGE {
            POSITIVE_TREND_INSIGHT
        } else {
            SEEK_JOY_INSIGHT
        }
        .to_string(),
    );
    lines.push(
        if avg_anxiety > HIGH_AVERAGE {
            HIGH_ANXIETY_INSIGHT
        } else {
            MANAGED_ANXIETY_INSIGHT
        }
        .to_string(),
    );
    if avg_sadness > HIGH_AVERAGE {
        lines.push(HIGH_SADNESS_INSIGHT.to_string());
    }
    lines
}

fn mean_of(entries: &[DatedSentiment], emotion: Emotion) -> f64 {
    let total: u64 = entries
        .iter()
        .map(|e| u64::from(e.sentiment.percentage(emotion)))
        .sum();
    total as f64 / entries.len() as f64
}

fn round_percentage(mean: f64) -> u8 {
    mean.round().clamp(0.0, 100.0) as u8
}

fn trend_point(entry: &DatedSentiment) -> TrendPoint {
    let s = &entry.sentiment;
    TrendPoint {
        date: entry.created_at.date_naive(),
        score: s.overall_value().unwrap_or(0.0),
        joy: s.joy,
        sadness: s.sadness,
        anxiety: s.anxiety,
    }
}
