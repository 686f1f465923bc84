//! # eterna-sentiment
//!
//! Lexicon-based emotion scoring. Converts free text into a percentage
//! distribution over joy, sadness, anxiety, and anger, a neutral residual, a
//! signed overall score, and a feedback line.
//!
//! ## Passes (in order)
//! 1. Lexicon tiers: direct (3), indirect (2), phrases (4)
//! 2. Regex cue groups (fixed bonuses)
//! 3. Physical symptoms (2.5)
//! 4. Global negation, then intensifier scaling
//! 5. Normalization, overall score, degenerate-input fallback ladder
//! 6. Dominant emotion and feedback selection
//!
//! Stored records are read back through [`stored::parse_stored`], which never fails.

pub mod cues;
pub mod engine;
pub mod feedback;
pub mod lexicon;
pub mod scoring;
pub mod stored;

pub use engine::SentimentEngine;
pub use scoring::{Analysis, Percentages, RawScores};
pub use stored::{parse_stored, prior_from_stored, try_parse_stored, DecodeError};

use eterna_core::SentimentResult;

/// Score one text with the default configuration.
pub fn score(text: &str) -> SentimentResult {
    SentimentEngine::new().score(text)
}
