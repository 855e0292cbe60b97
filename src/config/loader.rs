//! Configuration loading and merging logic
//!
//! Handles loading configuration from the config file and environment, and
//! merging them according to precedence rules.

use super::{paths, schema::Config};
use crate::models::{Kind, Theme};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Same as [`ConfigLoader::load`] with an explicit config file path
    pub fn load_from(path: &Path) -> Result<Config> {
        let mut config = Self::load_defaults();

        if path.exists() {
            config = Self::load_file(path)?;
        }

        Ok(Self::apply_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file is a valid, default config
        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking for errors
    ///
    /// Fails on invalid YAML, invalid value types, read errors, and a
    /// configured data directory that exists but is not a directory.
    pub fn validate(path: &Path) -> Result<()> {
        let config = Self::load_from(path).context("Failed to load configuration")?;

        if let Some(dir) = &config.data_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(anyhow::anyhow!(
                    "dataDir {} exists but is not a directory",
                    dir.display()
                ));
            }
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    ///
    /// `lookup` resolves a variable name; invalid values are ignored with a
    /// warning.
    pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = lookup("HOBBYLIST_THEME") {
            match theme.parse::<Theme>() {
                Ok(theme) => config.ui.theme = theme,
                Err(e) => tracing::warn!("Ignoring HOBBYLIST_THEME: {}", e),
            }
        }

        if let Some(kind) = lookup("HOBBYLIST_DEFAULT_KIND") {
            match kind.parse::<Kind>() {
                Ok(kind) => config.default_kind = kind,
                Err(e) => tracing::warn!("Ignoring HOBBYLIST_DEFAULT_KIND: {}", e),
            }
        }

        if let Some(samples) = lookup("HOBBYLIST_SAMPLES") {
            match samples.parse::<bool>() {
                Ok(val) => config.samples = val,
                Err(_) => tracing::warn!("Ignoring HOBBYLIST_SAMPLES: expected true or false"),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }

    /// Store file location for this configuration
    pub fn store_path(config: &Config) -> PathBuf {
        paths::store_path(config.data_dir.as_deref())
    }
}
