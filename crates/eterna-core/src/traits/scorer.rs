use crate::models::SentimentResult;

/// Text → emotion distribution. Implementations are total: every input,
/// including the empty string, yields a well-formed result.
pub trait IEmotionScorer: Send + Sync {
    /// Score a single journal entry.
    fn score(&self, text: &str) -> SentimentResult;
}
