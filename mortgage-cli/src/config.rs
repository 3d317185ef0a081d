//! Optional TOML configuration for the command-line front end.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [defaults]
//! loan_amount = "250000"
//! term_years = 15
//! annual_taxes = "3000"
//! insurance_rate = "0.004"
//! ```
//!
//! Every section and key is optional. Defaults outside their field's
//! domain are rejected.

use std::path::{Path, PathBuf};

use mortgage_core::{CalculationError, InputDefaults};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid default for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<CalculationError> for ConfigError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::InvalidInput { field, reason } => Self::Invalid { field, reason },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub defaults: InputDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses `s` and checks the `[defaults]` values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.defaults.validate()?;
        Ok(config)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
