//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strtr_core::OrderingMode;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Replacement configuration
    #[serde(default)]
    pub replace: ReplaceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file written in TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }
}

/// Replacement-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ReplaceConfig {
    /// Default needle ordering ("longest" or "insertion")
    pub default_ordering: String,
}

impl ReplaceConfig {
    /// Parse the configured ordering mode
    pub fn ordering(&self) -> Result<OrderingMode> {
        self.default_ordering
            .parse()
            .map_err(|e| CliError::ConfigError(format!("{e}")).into())
    }
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            default_ordering: OrderingMode::default().as_str().to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}
