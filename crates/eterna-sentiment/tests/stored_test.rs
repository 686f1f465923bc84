use chrono::{TimeZone, Utc};
use eterna_core::SentimentResult;
use eterna_sentiment::{parse_stored, prior_from_stored, score, try_parse_stored, DecodeError};

#[test]
fn missing_and_blank_are_missing() {
    assert_eq!(try_parse_stored(None), Err(DecodeError::Missing));
    assert_eq!(try_parse_stored(Some("")), Err(DecodeError::Missing));
    assert_eq!(try_parse_stored(Some("  \n")), Err(DecodeError::Missing));
}

#[test]
fn garbage_is_malformed() {
    let err = try_parse_stored(Some("not json")).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }));
    assert!(err.to_string().starts_with("malformed sentiment JSON"));
}

#[test]
fn non_objects_are_rejected_by_kind() {
    assert_eq!(
        try_parse_stored(Some("null")),
        Err(DecodeError::NotAnObject { found: "null" })
    );
    assert_eq!(
        try_parse_stored(Some("[1,2]")),
        Err(DecodeError::NotAnObject { found: "array" })
    );
    assert_eq!(
        try_parse_stored(Some("3")),
        Err(DecodeError::NotAnObject { found: "number" })
    );
}

#[test]
fn unreadable_input_yields_canonical_default() {
    for raw in [None, Some(""), Some("not json"), Some("null"), Some("[1,2]")] {
        let r = parse_stored(raw);
        assert!(
            r.same_scores(&SentimentResult::canonical_default()),
            "{raw:?} decoded to {r:?}"
        );
        assert_eq!(r.neutral, 100);
        assert_eq!(r.overall_score, "0");
        assert_eq!(r.feedback, "No feedback available.");
    }
}

#[test]
fn empty_object_decodes_to_zeros() {
    let r = parse_stored(Some("{}"));
    assert_eq!([r.joy, r.sadness, r.anxiety, r.anger, r.neutral], [0; 5]);
    assert_eq!(r.overall_score, "0");
    assert_eq!(r.feedback, "No feedback available.");
}

#[test]
fn partial_legacy_record_keeps_what_it_has() {
    let r = parse_stored(Some(r#"{"joy":40,"anger":"12","overallScore":"0.10"}"#));
    assert_eq!(r.joy, 40);
    assert_eq!(r.anger, 12);
    assert_eq!(r.sadness, 0);
    assert_eq!(r.overall_score, "0.10");
    assert_eq!(r.overall_value(), Some(0.1));
}

#[test]
fn unknown_fields_are_ignored() {
    let r = parse_stored(Some(r#"{"joy":70,"mood":"great","version":3}"#));
    assert_eq!(r.joy, 70);
}

#[test]
fn scored_result_survives_storage() {
    let original = score("I feel lonely and tired, nothing works out anymore");
    let stored = serde_json::to_string(&original).unwrap();
    let decoded = parse_stored(Some(&stored));
    assert!(decoded.same_scores(&original));
    assert_eq!(decoded.timestamp, original.timestamp);
}

#[test]
fn prior_from_stored_carries_entry_identity() {
    let at = Utc.with_ymd_and_hms(2024, 3, 2, 8, 15, 0).unwrap();
    let prior = prior_from_stored("entry-7", at, Some(r#"{"overallScore":"-0.75"}"#));
    assert_eq!(prior.id, "entry-7");
    assert_eq!(prior.timestamp, at);
    assert_eq!(prior.sentiment.overall_value(), Some(-0.75));

    let unreadable = prior_from_stored("entry-8", at, None);
    assert_eq!(unreadable.sentiment.overall_score, "0");
}
