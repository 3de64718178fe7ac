//! Configuration management for the address book binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the binary prints the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered record per line
    #[default]
    Text,
    /// Pretty-printed JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Output format for printed records (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `OUTPUT_FORMAT`: `text` or `json` (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output_format = Self::parse_env_output_format("OUTPUT_FORMAT", OutputFormat::Text)?;

        Ok(Config {
            log_level,
            output_format,
        })
    }

    /// Parse an environment variable as an OutputFormat with a default value.
    fn parse_env_output_format(var_name: &str, default: OutputFormat) -> ConfigResult<OutputFormat> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason,
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}
