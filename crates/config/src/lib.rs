//! Configuration management for the careline evaluation harness
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (CARELINE_ prefix)
//!
//! Settings are read once at startup and passed explicitly into the harness;
//! nothing here is ambient process state. The runtime mode and tracing toggle
//! affect logging verbosity only, never extraction semantics.

pub mod settings;

pub use settings::{load_settings, DatasetConfig, ObservabilityConfig, RuntimeMode, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
