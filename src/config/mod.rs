//! Configuration system for hobbylist
//!
//! A single YAML file layered over built-in defaults, with environment
//! variable overrides on top.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, UiConfig};

use anyhow::Context;
use std::path::PathBuf;

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "dataDir" => Ok(config
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()),
        "defaultKind" => Ok(config.default_kind.to_string()),
        "samples" => Ok(config.samples.to_string()),
        "ui.theme" => Ok(config.ui.theme.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "dataDir" => {
            config.data_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "defaultKind" => {
            config.default_kind = value.parse().map_err(anyhow::Error::msg)?;
        }
        "samples" => {
            config.samples = value
                .parse()
                .context("samples must be 'true' or 'false'")?;
        }
        "ui.theme" => {
            config.ui.theme = value.parse().map_err(anyhow::Error::msg)?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Kind, Theme};

    #[test]
    fn test_set_then_get() {
        let mut config = Config::default();
        set_config_value(&mut config, "defaultKind", "book").unwrap();
        set_config_value(&mut config, "ui.theme", "dark").unwrap();
        set_config_value(&mut config, "dataDir", "/data/hl").unwrap();

        assert_eq!(config.default_kind, Kind::Book);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(get_config_value(&config, "dataDir").unwrap(), "/data/hl");

        set_config_value(&mut config, "dataDir", "").unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "samples", "maybe").is_err());
        assert!(set_config_value(&mut config, "defaultKind", "movie").is_err());
        assert!(set_config_value(&mut config, "readOnly", "true").is_err());
        assert!(get_config_value(&config, "readOnly").is_err());
    }
}
