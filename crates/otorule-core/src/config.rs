// Rust guideline compliant 2026-02-06

//! Configuration management for otorule.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for otorule behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum entries kept per alias (0 = unlimited).
    #[serde(default)]
    pub max_entries: usize,

    /// Whether to apply tail rules by default.
    #[serde(default)]
    pub apply_tail_rule: bool,

    /// Directory receiving `new_oto.ini`; the documents directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Whether to write `debug_info.txt` next to the converted file.
    #[serde(default)]
    pub write_trace: bool,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level for the stderr logger.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 0,
            apply_tail_rule: false,
            output_dir: None,
            write_trace: false,
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given
    /// 3. Environment variables with `OTORULE_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file is given but does not exist or cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::NotFound(path.to_path_buf()));
            }
            let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `OTORULE_MAX_ENTRIES` - Per-alias cap (0 = unlimited)
    /// - `OTORULE_APPLY_TAIL_RULE` - Apply tail rules (true/false)
    /// - `OTORULE_OUTPUT_DIR` - Output directory
    /// - `OTORULE_WRITE_TRACE` - Write debug trace (true/false)
    /// - `OTORULE_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `OTORULE_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("OTORULE_MAX_ENTRIES") {
            self.max_entries = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("OTORULE_MAX_ENTRIES must be a non-negative number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("OTORULE_APPLY_TAIL_RULE") {
            self.apply_tail_rule = val.parse().map_err(|_| {
                Error::InvalidConfig("OTORULE_APPLY_TAIL_RULE must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("OTORULE_OUTPUT_DIR") {
            self.output_dir = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        if let Ok(val) = std::env::var("OTORULE_WRITE_TRACE") {
            self.write_trace = val.parse().map_err(|_| {
                Error::InvalidConfig("OTORULE_WRITE_TRACE must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("OTORULE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "OTORULE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("OTORULE_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not one of error, warn, info, debug
    /// or trace.
    fn validate(&self) -> Result<()> {
        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(Error::InvalidConfig(format!(
                "log_level must be error, warn, info, debug or trace, got {}",
                other
            ))),
        }
    }
}
