//! Mood-shift detection: compares a new entry's overall score against the
//! most recent prior entries.

use eterna_core::config::ShiftConfig;
use eterna_core::constants::SHIFT_MESSAGE;
use eterna_core::models::ShiftKind;
use eterna_core::{ContradictionNotice, PriorEntry, SentimentResult};
use eterna_observability::shift_span;

/// Flags every recent prior whose overall score differs from the current one
/// by strictly more than the threshold.
#[derive(Debug, Clone, Default)]
pub struct MoodShiftDetector {
    config: ShiftConfig,
}

impl MoodShiftDetector {
    pub fn new(config: ShiftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }

    /// Compare `current` against the first `window` entries of `priors`.
    ///
    /// `priors` must be ordered most recent first. Notices come back in the
    /// same order. Pure: no I/O, no clock.
    pub fn detect_shifts(
        &self,
        current: &SentimentResult,
        priors: &[PriorEntry],
    ) -> Vec<ContradictionNotice> {
        let _span = shift_span!(priors.len()).entered();

        let Some(current_score) = current.overall_value() else {
            tracing::debug!(
                overall = %current.overall_score,
                "current overall score unparseable, skipping shift detection"
            );
            return Vec::new();
        };

        let mut notices = Vec::new();
        for prior in priors.iter().take(self.config.window) {
            let Some(prior_score) = prior.sentiment.overall_value() else {
                tracing::debug!(entry = %prior.id, "prior overall score unparseable, skipped");
                continue;
            };
            let delta = current_score - prior_score;
            if delta.abs() > self.config.threshold {
                tracing::info!(
                    entry = %prior.id,
                    current = current_score,
                    prior = prior_score,
                    delta,
                    "emotional shift detected"
                );
                notices.push(notice_for(prior));
            }
        }
        notices
    }
}

fn notice_for(prior: &PriorEntry) -> ContradictionNotice {
    ContradictionNotice {
        kind: ShiftKind::EmotionalShift,
        referenced_entry_id: prior.id.clone(),
        message: SHIFT_MESSAGE.to_string(),
        referenced_entry_timestamp: prior.timestamp,
    }
}
