use chrono::Utc;
use eterna_core::config::SentimentConfig;
use eterna_core::{Emotion, IEmotionScorer, SentimentResult};
use eterna_observability::scoring_span;
use rayon::prelude::*;

use crate::cues::{check_pattern_health, PatternFailure};
use crate::feedback::select_feedback;
use crate::scoring::{self, Analysis};

/// Emotion scoring engine.
///
/// Stateless apart from its config; the lexicon is static. Safe to share
/// across threads and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct SentimentEngine {
    config: SentimentConfig,
}

impl SentimentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SentimentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Run the scoring passes and keep the intermediate state.
    pub fn analyze(&self, text: &str) -> Analysis {
        scoring::analyze(text, &self.config)
    }

    /// Score a single entry. Total over all inputs.
    pub fn score(&self, text: &str) -> SentimentResult {
        let _span = scoring_span!(text.split_whitespace().count()).entered();

        let analysis = self.analyze(text);
        if !analysis.fallback_rules.is_empty() {
            tracing::debug!(
                word_count = analysis.word_count,
                rules = ?analysis.fallback_rules,
                "no lexicon matches, fallback ladder applied"
            );
        }
        tracing::trace!(
            cues = ?analysis.cues_fired,
            negation = analysis.negation_applied,
            intensifiers = analysis.intensifier_count,
            "scoring passes complete"
        );

        let feedback = select_feedback(&analysis.percentages);
        tracing::debug!(
            dominant = ?analysis.dominant,
            overall = %analysis.overall_score,
            "entry scored"
        );

        let p = analysis.percentages;
        SentimentResult {
            joy: p.get(Emotion::Joy),
            sadness: p.get(Emotion::Sadness),
            anxiety: p.get(Emotion::Anxiety),
            anger: p.get(Emotion::Anger),
            neutral: analysis.neutral,
            overall_score: analysis.overall_score,
            feedback: feedback.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Score many texts in parallel. Output order matches input order.
    pub fn score_batch(&self, texts: &[&str]) -> Vec<SentimentResult> {
        texts.par_iter().map(|t| self.score(t)).collect()
    }

    /// Cue and fallback patterns that failed to compile. Empty when healthy.
    pub fn health(&self) -> Vec<PatternFailure> {
        let failures = check_pattern_health();
        for failure in &failures {
            tracing::warn!(
                rule = failure.rule,
                group = failure.group,
                "pattern failed to compile, rule disabled"
            );
        }
        failures
    }
}

impl IEmotionScorer for SentimentEngine {
    fn score(&self, text: &str) -> SentimentResult {
        SentimentEngine::score(self, text)
    }
}
