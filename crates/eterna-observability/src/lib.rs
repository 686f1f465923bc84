//! # eterna-observability
//!
//! Structured tracing for the Eterna engine: subscriber setup driven by
//! `ETERNA_LOG` or [`ObservabilityConfig`](eterna_core::config::ObservabilityConfig),
//! and span definitions for scoring, shift detection, and analytics.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
