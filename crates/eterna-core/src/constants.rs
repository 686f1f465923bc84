/// Eterna engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Feedback carried by a record that could not be decoded, or lacks feedback.
pub const DEFAULT_FEEDBACK: &str = "No feedback available.";

/// Overall score carried by a record that could not be decoded, or lacks one.
pub const DEFAULT_OVERALL_SCORE: &str = "0";

/// Fixed message attached to every mood-shift notice.
pub const SHIFT_MESSAGE: &str = "Significant mood shift detected from previous entry";

/// Text scored for a voice entry that arrived without a transcription.
pub const VOICE_PLACEHOLDER: &str = "[Voice entry]";

/// Upper bound of every emotion percentage.
pub const MAX_PERCENTAGE: u8 = 100;
