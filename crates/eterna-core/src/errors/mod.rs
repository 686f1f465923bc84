//! Error handling for Eterna.
//! One error enum per subsystem, `thiserror` only.

mod config_error;

pub use config_error::ConfigError;
