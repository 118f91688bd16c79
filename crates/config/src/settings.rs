//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Runtime mode for the harness. Affects logging verbosity only, never
/// extraction semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// Simulation mode - verbose per-case logging for local runs
    #[default]
    Simulation,
    /// Live mode - summary logging only
    Live,
}

impl RuntimeMode {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime mode (simulation, live)
    #[serde(default)]
    pub mode: RuntimeMode,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Golden dataset configuration
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (tracing EnvFilter syntax)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit per-candidate extraction traces at debug level
    #[serde(default)]
    pub trace_extraction: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            trace_extraction: false,
        }
    }
}

/// Golden dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the newline-delimited JSON golden dataset
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String {
    "data/golden.jsonl".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Load settings with layered sources.
///
/// Priority: env vars (`CARELINE_` prefix) > `config/{env}.yaml` >
/// `config/default.yaml` > built-in defaults. Missing files are not an
/// error; the defaults make the harness runnable with no config at all.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    if Path::new("config/default.yaml").exists() {
        builder = builder.add_source(File::with_name("config/default"));
    }

    if let Some(env_name) = env {
        let env_file = format!("config/{}.yaml", env_name);
        if Path::new(&env_file).exists() {
            builder = builder.add_source(File::with_name(&format!("config/{}", env_name)));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("CARELINE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    config.try_deserialize().map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.mode, RuntimeMode::Simulation);
        assert_eq!(settings.observability.log_level, "info");
        assert!(!settings.observability.trace_extraction);
        assert_eq!(settings.dataset.path, "data/golden.jsonl");
    }

    #[test]
    fn test_mode_deserialization() {
        let mode: RuntimeMode = serde_json::from_str("\"live\"").unwrap();
        assert!(mode.is_live());
        let mode: RuntimeMode = serde_json::from_str("\"simulation\"").unwrap();
        assert!(!mode.is_live());
    }
}
