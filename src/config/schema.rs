//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use crate::models::{Kind, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the store file (defaults to the platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Kind used when adding an item without one
    #[serde(default = "default_kind")]
    pub default_kind: Kind,

    /// Load the built-in sample lists for the reserved demo users
    #[serde(default = "default_true")]
    pub samples: bool,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Theme used until one has been chosen and persisted
    #[serde(default)]
    pub theme: Theme,
}

// Default value functions
fn default_kind() -> Kind {
    Kind::Series
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_kind: default_kind(),
            samples: default_true(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
        }
    }
}
