// File: src/config.rs
// Purpose: Navigation settings parsed from rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::route::RouteOptions;

/// Navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub navigation: NavigationDefaults,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Base path for all routes (e.g., "/app")
    #[serde(default)]
    pub base_path: Option<String>,
}

/// Defaults for navigations created without explicit options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NavigationDefaults {
    #[serde(default)]
    pub shallow: bool,
}

impl NavigationConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

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

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Invalid navigation config")
    }

    /// Base path, or `""` when unset
    pub fn base_path(&self) -> &str {
        self.routing.base_path.as_deref().unwrap_or_default()
    }

    /// Options applied when a caller passes none
    pub fn default_options(&self) -> RouteOptions {
        RouteOptions {
            shallow: self.navigation.shallow,
        }
    }
}
