//! Configuration system for Eterna.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod analytics_config;
pub mod defaults;
pub mod eterna_config;
pub mod observability_config;
pub mod sentiment_config;
pub mod shift_config;

pub use analytics_config::AnalyticsConfig;
pub use eterna_config::EternaConfig;
pub use observability_config::ObservabilityConfig;
pub use sentiment_config::SentimentConfig;
pub use shift_config::ShiftConfig;
