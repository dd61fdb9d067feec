//! Configuration management for cookbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "cookbook";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `COOKBOOK_`)
/// 2. TOML config file at `~/.config/cookbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration.
    pub catalog: CatalogConfig,
    /// Interactive session configuration.
    pub session: SessionConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Catalog-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Populate the store with the sample recipes on startup.
    pub seed_samples: bool,
    /// Cooking time given to recipes added without one.
    pub default_cooking_time_minutes: u32,
    /// Cuisine label given to recipes added without one.
    pub default_cuisine: String,
}

/// Session-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of search queries kept in the history.
    pub history_limit: usize,
    /// Prompt printed before each line in the interactive shell.
    pub prompt: String,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line.
    pub format: OutputFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            default_cooking_time_minutes: 20,
            default_cuisine: "Cuisine".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 5,
            prompt: "cookbook> ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("COOKBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.session.history_limit == 0 {
            return Err(Error::ConfigValidation {
                message: "history_limit must be greater than 0".to_string(),
            });
        }

        if self.catalog.default_cuisine.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "default_cuisine cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
