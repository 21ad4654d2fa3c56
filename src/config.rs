//! YAML configuration for default generator and output settings.
//!
//! Every section is optional:
//!
//! ```yaml
//! log_level: info
//! output:
//!   format: json
//!   pretty: true
//! generate:
//!   prefix: "2001:db8::"
//!   count: 4
//! ```

use std::fs::File;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::address::{Ipv6Prefix, DEFAULT_PREFIX};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_level: String,
    pub output: OutputConfig,
    pub generate: GenerateConfig,
}

/// Output rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Defaults for the `generate` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub prefix: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Invalid generate configuration: {0}")]
    InvalidGenerate(String),
}

/// Default implementations
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputConfig::default(),
            generate: GenerateConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            count: 1,
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ValidationError::InvalidLogLevel(format!(
                "'{}' (expected one of off, error, warn, info, debug, trace)",
                self.log_level
            )));
        }

        if self.generate.count == 0 {
            return Err(ValidationError::InvalidGenerate(
                "count must be at least 1".to_string(),
            ));
        }

        Ipv6Prefix::parse(&self.generate.prefix)
            .map_err(|e| ValidationError::InvalidGenerate(e.to_string()))?;

        Ok(())
    }
}

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration file '{}'", config_path.display()))?;

    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration file '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}
