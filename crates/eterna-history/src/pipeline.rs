//! Scores a new entry and checks it against recent history in one call.

use eterna_core::constants::VOICE_PLACEHOLDER;
use eterna_core::{ContradictionNotice, EternaConfig, IEmotionScorer, PriorEntry, SentimentResult};
use eterna_sentiment::SentimentEngine;
use serde::Serialize;

use crate::shift::MoodShiftDetector;

/// What saving an entry produces: its sentiment and any shift notices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAnalysis {
    pub sentiment: SentimentResult,
    pub contradictions: Vec<ContradictionNotice>,
}

/// Scorer plus shift detector.
pub struct EntryPipeline<S: IEmotionScorer> {
    scorer: S,
    detector: MoodShiftDetector,
}

impl EntryPipeline<SentimentEngine> {
    /// Default engine and detector, configured from `config`.
    pub fn from_config(config: &EternaConfig) -> Self {
        Self::new(
            SentimentEngine::with_config(config.sentiment.clone()),
            MoodShiftDetector::new(config.shift.clone()),
        )
    }
}

impl<S: IEmotionScorer> EntryPipeline<S> {
    pub fn new(scorer: S, detector: MoodShiftDetector) -> Self {
        Self { scorer, detector }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn detector(&self) -> &MoodShiftDetector {
        &self.detector
    }

    /// Score `text` and compare it against `priors` (most recent first).
    pub fn process(&self, text: &str, priors: &[PriorEntry]) -> EntryAnalysis {
        let sentiment = self.scorer.score(text);
        let contradictions = self.detector.detect_shifts(&sentiment, priors);
        EntryAnalysis {
            sentiment,
            contradictions,
        }
    }

    /// Like [`process`](Self::process) for a voice entry. A missing or blank
    /// transcription is scored as the voice placeholder text.
    pub fn process_voice(
        &self,
        transcription: Option<&str>,
        priors: &[PriorEntry],
    ) -> EntryAnalysis {
        let text = match transcription {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                tracing::debug!("voice entry without transcription, scoring placeholder");
                VOICE_PLACEHOLDER
            }
        };
        self.process(text, priors)
    }
}
