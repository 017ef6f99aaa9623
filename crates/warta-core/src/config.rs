// Rust guideline compliant 2026-02-06

//! Configuration management for Warta.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

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

/// Configuration for Warta behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How many times a status change is re-read and re-validated after a
    /// concurrent write before giving up.
    #[serde(default = "default_max_transition_retries")]
    pub max_transition_retries: u32,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Author name used when `create` is run without `--author`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_author: Option<String>,

    /// Maximum excerpt length, in characters, derived from content.
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
}

fn default_max_transition_retries() -> u32 {
    3
}

fn default_excerpt_length() -> usize {
    160
}

const MAX_TRANSITION_RETRIES: u32 = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_transition_retries: default_max_transition_retries(),
            output_format: OutputFormat::default(),
            default_author: None,
            excerpt_length: default_excerpt_length(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.warta/config.toml`
    /// 3. Environment variables with `WARTA_` prefix
    ///
    /// # Arguments
    ///
    /// * `warta_dir` - Path to the `.warta` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(warta_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = warta_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
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
    /// - `WARTA_MAX_TRANSITION_RETRIES` - Retry budget for conflicting writes
    /// - `WARTA_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `WARTA_DEFAULT_AUTHOR` - Default author name
    /// - `WARTA_EXCERPT_LENGTH` - Excerpt length in characters
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("WARTA_MAX_TRANSITION_RETRIES") {
            self.max_transition_retries = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "WARTA_MAX_TRANSITION_RETRIES must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("WARTA_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "WARTA_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("WARTA_DEFAULT_AUTHOR") {
            self.default_author = Some(val);
        }

        if let Ok(val) = std::env::var("WARTA_EXCERPT_LENGTH") {
            self.excerpt_length = val.parse().map_err(|_| {
                Error::InvalidConfig("WARTA_EXCERPT_LENGTH must be a positive number".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - max_transition_retries is outside 1-10
    /// - default_author is set but blank
    /// - excerpt_length is zero
    fn validate(&self) -> Result<()> {
        if !(1..=MAX_TRANSITION_RETRIES).contains(&self.max_transition_retries) {
            return Err(Error::InvalidConfig(format!(
                "max_transition_retries must be 1-{}, got {}",
                MAX_TRANSITION_RETRIES, self.max_transition_retries
            )));
        }

        if let Some(author) = &self.default_author {
            if author.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "default_author cannot be blank".to_string(),
                ));
            }
        }

        if self.excerpt_length == 0 {
            return Err(Error::InvalidConfig(
                "excerpt_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `config.toml` in `warta_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, warta_dir: &Path) -> Result<()> {
        let config_path = warta_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
