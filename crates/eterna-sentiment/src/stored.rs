//! Read-path decoding of persisted sentiment records.
//!
//! Stored records are opaque JSON text written by older or newer versions of
//! the engine. [`try_parse_stored`] names the failure; [`parse_stored`] never
//! fails and substitutes [`SentimentResult::canonical_default`] instead.
//! Sentiment is derived data, so a lost record can always be re-scored.

use chrono::{DateTime, NaiveDateTime, Utc};
use eterna_core::constants::{DEFAULT_FEEDBACK, DEFAULT_OVERALL_SCORE, MAX_PERCENTAGE};
use eterna_core::{PriorEntry, SentimentResult};
use serde_json::{Map, Value};

/// Why a stored record could not be decoded at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("no stored sentiment")]
    Missing,

    #[error("malformed sentiment JSON: {message}")]
    Malformed { message: String },

    #[error("stored sentiment is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },
}

/// Decode a stored record, coercing each field independently.
///
/// Only a missing, unparseable, or non-object payload is an error. Inside an
/// object, every numeric field falls back to 0, and `overallScore`,
/// `feedback`, and `timestamp` fall back to their defaults.
pub fn try_parse_stored(raw: Option<&str>) -> Result<SentimentResult, DecodeError> {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r,
        _ => return Err(DecodeError::Missing),
    };

    let value: Value = serde_json::from_str(raw).map_err(|e| DecodeError::Malformed {
        message: e.to_string(),
    })?;

    match value {
        Value::Object(fields) => Ok(from_fields(&fields)),
        other => Err(DecodeError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// Decode a stored record. Never fails.
pub fn parse_stored(raw: Option<&str>) -> SentimentResult {
    match try_parse_stored(raw) {
        Ok(result) => result,
        Err(e) => {
            tracing::debug!(error = %e, "stored sentiment unreadable, using canonical default");
            SentimentResult::canonical_default()
        }
    }
}

/// Build a detector input from a persisted entry's id, creation time, and
/// serialized sentiment.
pub fn prior_from_stored(
    id: impl Into<String>,
    timestamp: DateTime<Utc>,
    raw: Option<&str>,
) -> PriorEntry {
    PriorEntry::new(id, timestamp, parse_stored(raw))
}

fn from_fields(fields: &Map<String, Value>) -> SentimentResult {
    SentimentResult {
        joy: coerce_percentage(fields.get("joy")),
        sadness: coerce_percentage(fields.get("sadness")),
        anxiety: coerce_percentage(fields.get("anxiety")),
        anger: coerce_percentage(fields.get("anger")),
        neutral: coerce_percentage(fields.get("neutral")),
        overall_score: coerce_overall(fields.get("overallScore")),
        feedback: coerce_feedback(fields.get("feedback")),
        timestamp: coerce_timestamp(fields.get("timestamp")),
    }
}

/// Numeric conversion defaulting to 0, rounded and clamped into `0..=100`.
fn coerce_percentage(value: Option<&Value>) -> u8 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if !number.is_finite() {
        return 0;
    }
    number.round().clamp(0.0, f64::from(MAX_PERCENTAGE)) as u8
}

fn coerce_overall(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => DEFAULT_OVERALL_SCORE.to_string(),
    }
}

fn coerce_feedback(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => DEFAULT_FEEDBACK.to_string(),
    }
}

/// RFC 3339, SQLite `YYYY-MM-DD HH:MM:SS` (UTC), or epoch milliseconds.
/// Anything else is stamped with the current instant.
fn coerce_timestamp(value: Option<&Value>) -> DateTime<Utc> {
    let parsed = match value {
        Some(Value::String(s)) => parse_timestamp_str(s.trim()),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    parsed.unwrap_or_else(Utc::now)
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
