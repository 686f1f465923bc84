//! # eterna-history
//!
//! Everything that looks at an entry in the context of earlier ones:
//! - [`shift::MoodShiftDetector`] flags large swings in overall score
//! - [`analytics::summarize`] aggregates a user's entries into averages, a trend, and insights
//! - [`pipeline::EntryPipeline`] scores a new entry and runs the detector in one call

pub mod analytics;
pub mod pipeline;
pub mod shift;

pub use analytics::summarize;
pub use pipeline::{EntryAnalysis, EntryPipeline};
pub use shift::MoodShiftDetector;
