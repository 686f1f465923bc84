//! # eterna-core
//!
//! Foundation crate for the Eterna emotion engine.
//! Defines the sentiment record contract, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EternaConfig;
pub use errors::ConfigError;
pub use models::{ContradictionNotice, Emotion, PriorEntry, SentimentResult};
pub use traits::IEmotionScorer;
