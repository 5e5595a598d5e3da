//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".diligence").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: default_true(),
            format: default_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
            crate::cli::CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}
