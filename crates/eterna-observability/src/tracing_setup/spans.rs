//! Span definitions per operation: scoring, shift detection, analytics.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($word_count:expr) => {
        tracing::debug_span!("eterna.scoring", word_count = $word_count)
    };
}

/// Create a mood-shift detection span.
#[macro_export]
macro_rules! shift_span {
    ($prior_count:expr) => {
        tracing::debug_span!("eterna.shift", prior_count = $prior_count)
    };
}

/// Create an analytics span.
#[macro_export]
macro_rules! analytics_span {
    ($entry_count:expr) => {
        tracing::info_span!("eterna.analytics", entry_count = $entry_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "eterna.scoring";
    pub const SHIFT: &str = "eterna.shift";
    pub const ANALYTICS: &str = "eterna.analytics";
}
