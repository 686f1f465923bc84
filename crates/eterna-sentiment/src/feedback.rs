//! Canned feedback lines and the selection rule.

use eterna_core::Emotion;

use crate::scoring::Percentages;

pub const JOY_FEEDBACK: &str =
    "Your reflection radiates positive energy! Keep embracing these uplifting moments.";
pub const SADNESS_FEEDBACK: &str =
    "I hear the heaviness in your words. It's completely valid to feel this way. You're not alone.";
pub const ANXIETY_FEEDBACK: &str =
    "I sense worry and tension. Try taking deep breaths and focus on what you can control right now.";
pub const ANGER_FEEDBACK: &str =
    "I sense frustration and anger. These feelings are valid signals that something matters to you.";
/// Used when anxiety and sadness are both high, whatever is dominant.
pub const COMBINED_DISTRESS_FEEDBACK: &str =
    "I notice a mix of worry and sadness. Consider reaching out to someone you trust or practicing self-compassion.";
/// Used when no emotion registers at all.
pub const MIXED_FEEDBACK: &str =
    "Your reflection shows a mix of emotions. Continue this practice of self-awareness.";

/// Both anxiety and sadness must exceed this percentage for the combined line.
pub const COMBINED_DISTRESS_THRESHOLD: u8 = 30;

pub fn template_for(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Joy => JOY_FEEDBACK,
        Emotion::Sadness => SADNESS_FEEDBACK,
        Emotion::Anxiety => ANXIETY_FEEDBACK,
        Emotion::Anger => ANGER_FEEDBACK,
    }
}

/// Pick the feedback line for a final distribution.
pub fn select_feedback(percentages: &Percentages) -> &'static str {
    if percentages.get(Emotion::Anxiety) > COMBINED_DISTRESS_THRESHOLD
        && percentages.get(Emotion::Sadness) > COMBINED_DISTRESS_THRESHOLD
    {
        return COMBINED_DISTRESS_FEEDBACK;
    }
    match percentages.dominant() {
        Some(emotion) => template_for(emotion),
        None => MIXED_FEEDBACK,
    }
}
