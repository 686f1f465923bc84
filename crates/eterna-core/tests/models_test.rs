use chrono::{TimeZone, Utc};
use eterna_core::constants::{DEFAULT_FEEDBACK, DEFAULT_OVERALL_SCORE};
use eterna_core::models::*;

fn result(joy: u8, sadness: u8, anxiety: u8, anger: u8, overall: &str) -> SentimentResult {
    let sum = u16::from(joy) + u16::from(sadness) + u16::from(anxiety) + u16::from(anger);
    SentimentResult {
        joy,
        sadness,
        anxiety,
        anger,
        neutral: 100u16.saturating_sub(sum) as u8,
        overall_score: overall.to_string(),
        feedback: "fb".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn sentiment_result_serializes_with_storage_contract_keys() {
    let r = result(10, 20, 30, 40, "-0.50");
    let json = serde_json::to_value(&r).unwrap();
    let obj = json.as_object().unwrap();
    for key in [
        "joy",
        "sadness",
        "anxiety",
        "anger",
        "neutral",
        "overallScore",
        "feedback",
        "timestamp",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert_eq!(obj.len(), 8);
    assert_eq!(json["overallScore"], "-0.50");
    assert_eq!(json["joy"], 10);
}

#[test]
fn sentiment_result_roundtrip() {
    let r = result(1, 2, 3, 4, "0.12");
    let json = serde_json::to_string(&r).unwrap();
    let back: SentimentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}

#[test]
fn canonical_default_is_fully_neutral() {
    let d = SentimentResult::canonical_default();
    assert_eq!(d.emotion_total(), 0);
    assert_eq!(d.neutral, 100);
    assert_eq!(d.overall_score, DEFAULT_OVERALL_SCORE);
    assert_eq!(d.feedback, DEFAULT_FEEDBACK);
    assert_eq!(d.dominant(), None);
}

#[test]
fn dominant_prefers_first_on_ties() {
    assert_eq!(result(30, 30, 10, 10, "0").dominant(), Some(Emotion::Joy));
    assert_eq!(result(0, 25, 25, 25, "0").dominant(), Some(Emotion::Sadness));
    assert_eq!(result(0, 0, 40, 40, "0").dominant(), Some(Emotion::Anxiety));
    assert_eq!(result(5, 10, 20, 65, "0").dominant(), Some(Emotion::Anger));
}

#[test]
fn overall_value_parses_or_rejects() {
    assert_eq!(result(0, 0, 0, 0, "-0.90").overall_value(), Some(-0.9));
    assert_eq!(result(0, 0, 0, 0, " 0.8 ").overall_value(), Some(0.8));
    assert_eq!(result(0, 0, 0, 0, "abc").overall_value(), None);
    assert_eq!(result(0, 0, 0, 0, "NaN").overall_value(), None);
    assert_eq!(result(0, 0, 0, 0, "").overall_value(), None);
}

#[test]
fn same_scores_ignores_timestamp() {
    let a = result(10, 0, 0, 0, "1.00");
    let mut b = a.clone();
    b.timestamp = Utc::now();
    assert!(a.same_scores(&b));
    b.joy = 11;
    assert!(!a.same_scores(&b));
}

#[test]
fn contradiction_notice_uses_kebab_kind() {
    let notice = ContradictionNotice {
        kind: ShiftKind::EmotionalShift,
        referenced_entry_id: "42".into(),
        message: "m".into(),
        referenced_entry_timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    };
    let json = serde_json::to_value(&notice).unwrap();
    assert_eq!(json["kind"], "emotional-shift");
    assert_eq!(json["referencedEntryId"], "42");
    assert!(json.get("referencedEntryTimestamp").is_some());
}

#[test]
fn emotion_order_and_names() {
    let names: Vec<&str> = Emotion::ALL.iter().map(|e| e.as_str()).collect();
    assert_eq!(names, ["joy", "sadness", "anxiety", "anger"]);
    for (i, e) in Emotion::ALL.iter().enumerate() {
        assert_eq!(e.index(), i);
    }
    assert_eq!(serde_json::to_string(&Emotion::Anxiety).unwrap(), "\"anxiety\"");
}

#[test]
fn mood_analytics_serializes_camel_case() {
    let json = serde_json::to_value(MoodAnalytics::empty()).unwrap();
    assert_eq!(json["totalEntries"], 0);
    assert!(json["trend"].as_array().unwrap().is_empty());
}

#[test]
fn dominant_of_is_the_shared_tie_break() {
    assert_eq!(Emotion::dominant_of([0, 0, 0, 0]), None);
    assert_eq!(Emotion::dominant_of([0, 20, 20, 5]), Some(Emotion::Sadness));
    assert_eq!(Emotion::dominant_of([0, 0, 0, 7]), Some(Emotion::Anger));
    let r = result(12, 40, 40, 8, "0");
    assert_eq!(r.dominant(), Emotion::dominant_of([12, 40, 40, 8]));
}
