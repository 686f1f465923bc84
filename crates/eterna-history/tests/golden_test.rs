//! Golden dataset tests for eterna-history.
//!
//! Replays the mood-shift and analytics golden files through the detector
//! and the analytics summary.

use chrono::{DateTime, Utc};
use eterna_core::config::{AnalyticsConfig, ShiftConfig};
use eterna_core::models::{DatedSentiment, MoodAnalytics};
use eterna_core::{PriorEntry, SentimentResult};
use eterna_history::{summarize, MoodShiftDetector};
use serde_json::Value;
use test_fixtures::load_fixture_value;

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

fn sentiment_with_overall(overall: &str) -> SentimentResult {
    SentimentResult {
        overall_score: overall.to_string(),
        ..SentimentResult::canonical_default()
    }
}

#[test]
fn golden_mood_shifts() {
    let fixture = load_fixture_value("golden/history/mood_shifts.json");
    let detector = MoodShiftDetector::new(ShiftConfig::default());

    for case in fixture["cases"].as_array().unwrap() {
        let id = case["id"].as_str().unwrap();
        let current = sentiment_with_overall(case["current"].as_str().unwrap());
        let priors: Vec<PriorEntry> = case["priors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| {
                PriorEntry::new(
                    p["id"].as_str().unwrap(),
                    timestamp(&p["timestamp"]),
                    sentiment_with_overall(p["overallScore"].as_str().unwrap()),
                )
            })
            .collect();

        let notices = detector.detect_shifts(&current, &priors);
        let flagged: Vec<&str> = notices
            .iter()
            .map(|n| n.referenced_entry_id.as_str())
            .collect();
        let expected: Vec<&str> = case["expected"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(flagged, expected, "{id}");

        for notice in &notices {
            let source = priors
                .iter()
                .find(|p| p.id == notice.referenced_entry_id)
                .unwrap();
            assert_eq!(notice.referenced_entry_timestamp, source.timestamp, "{id}");
        }
    }
}

#[test]
fn golden_analytics() {
    let fixture = load_fixture_value("golden/history/analytics.json");

    for case in fixture["cases"].as_array().unwrap() {
        let id = case["id"].as_str().unwrap();
        let entries: Vec<DatedSentiment> = case["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| DatedSentiment {
                created_at: timestamp(&e["createdAt"]),
                sentiment: SentimentResult {
                    joy: e["joy"].as_u64().unwrap() as u8,
                    sadness: e["sadness"].as_u64().unwrap() as u8,
                    anxiety: e["anxiety"].as_u64().unwrap() as u8,
                    anger: e["anger"].as_u64().unwrap() as u8,
                    overall_score: e["overallScore"].as_str().unwrap().to_string(),
                    ..SentimentResult::canonical_default()
                },
            })
            .collect();

        let expected: MoodAnalytics = serde_json::from_value(case["expected"].clone())
            .unwrap_or_else(|e| panic!("{id}: bad expectation: {e}"));
        assert_eq!(summarize(&entries, &AnalyticsConfig::default()), expected, "{id}");
    }
}
