// File: src/config.rs
// Purpose: CRUD route configuration parsing from rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Action;

/// Configuration file, only the `[crud]` table is read
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub crud: CrudConfig,
}

/// CRUD route generation settings
///
/// ```toml
/// [crud]
/// views_dir = "./app/views"
/// extension = "rsx"
/// default_actions = ["index", "show"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrudConfig {
    /// Directory view file references are built under (default: "./views")
    #[serde(default = "default_views_dir")]
    pub views_dir: String,

    /// View file extension without the dot (default: "tsx", empty for none)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Actions generated when a resource has no `only` (default: all five)
    #[serde(default = "default_actions")]
    pub default_actions: Vec<Action>,
}

// Default values
fn default_views_dir() -> String {
    "./views".to_string()
}

fn default_extension() -> String {
    "tsx".to_string()
}

fn default_actions() -> Vec<Action> {
    Action::ALL.to_vec()
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self {
            views_dir: default_views_dir(),
            extension: default_extension(),
            default_actions: default_actions(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./rhtmx.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx.toml")
    }

    /// Parse configuration from TOML text; empty text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
