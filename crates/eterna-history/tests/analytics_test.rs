use chrono::{Duration, NaiveDate, TimeZone, Utc};
use eterna_core::config::AnalyticsConfig;
use eterna_core::models::{DatedSentiment, MoodAnalytics};
use eterna_core::SentimentResult;
use eterna_history::analytics::{HIGH_SADNESS_INSIGHT, POSITIVE_TREND_INSIGHT};
use eterna_history::summarize;

fn entry(day: i64, joy: u8, sadness: u8, overall: &str) -> DatedSentiment {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 18, 30, 0).unwrap();
    DatedSentiment {
        created_at: start + Duration::days(day),
        sentiment: SentimentResult {
            joy,
            sadness,
            overall_score: overall.to_string(),
            ..SentimentResult::canonical_default()
        },
    }
}

#[test]
fn empty_history_is_all_zero() {
    let a = summarize(&[], &AnalyticsConfig::default());
    assert_eq!(a, MoodAnalytics::empty());
    assert!(a.insights.is_empty());
}

#[test]
fn trend_keeps_the_latest_fourteen() {
    let entries: Vec<DatedSentiment> = (0..20).map(|d| entry(d, 70, 10, "0.60")).collect();
    let a = summarize(&entries, &AnalyticsConfig::default());
    assert_eq!(a.total_entries, 20);
    assert_eq!(a.trend.len(), 14);
    assert_eq!(a.trend[0].date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    assert_eq!(a.trend[13].date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    assert_eq!(a.insights[1], POSITIVE_TREND_INSIGHT);
}

#[test]
fn trend_window_is_configurable() {
    let entries: Vec<DatedSentiment> = (0..5).map(|d| entry(d, 10, 70, "-0.60")).collect();
    let a = summarize(&entries, &AnalyticsConfig { trend_window: 2 });
    assert_eq!(a.trend.len(), 2);
    assert_eq!(a.trend[1].score, -0.6);
    assert_eq!(a.avg_sadness, 70);
    assert!(a.insights.contains(&HIGH_SADNESS_INSIGHT.to_string()));
}

#[test]
fn unparseable_overall_scores_plot_as_zero() {
    let a = summarize(&[entry(0, 0, 0, "")], &AnalyticsConfig::default());
    assert_eq!(a.trend[0].score, 0.0);
}

#[test]
fn analytics_serializes_in_camel_case() {
    let a = summarize(&[entry(0, 50, 50, "0.00")], &AnalyticsConfig::default());
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["totalEntries"], 1);
    assert_eq!(json["avgJoy"], 50);
    assert_eq!(json["trend"][0]["date"], "2024-01-01");
}
