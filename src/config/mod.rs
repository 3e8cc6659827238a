//! Configuration system for yaml-path.
//!
//! This module provides the persisted defaults for yaml-path. Configuration is
//! loaded from a TOML file and then overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use yaml_path::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.format, "bosh");
//! assert_eq!(config.separator, "/");
//!
//! let custom = Config {
//!     format: "jsonpath".to_string(),
//!     ..Config::default()
//! };
//! assert_eq!(custom.name_attribute, "name");
//! ```

use crate::yamlpath::formatter::SlashOptions;
use serde::Deserialize;
use std::path::Path;

/// Configuration for the yaml-path command.
///
/// # Fields
///
/// * `format` - Output grammar, "bosh" or "jsonpath" (default: "bosh")
/// * `separator` - Segment separator for bosh paths (default: "/")
/// * `name_attribute` - Key used to name sequence elements in bosh paths,
///   empty to disable (default: "name")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Output grammar
    #[serde(default = "default_format")]
    pub format: String,

    /// Segment separator for bosh paths
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Key used to name sequence elements
    #[serde(default = "default_name_attribute")]
    pub name_attribute: String,
}

fn default_format() -> String {
    "bosh".to_string()
}

fn default_separator() -> String {
    "/".to_string()
}

fn default_name_attribute() -> String {
    "name".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: default_format(),
            separator: default_separator(),
            name_attribute: default_name_attribute(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yaml-path/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yaml-path");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring malformed config");
                Self::default()
            }),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read config");
                Self::default()
            }
        }
    }

    /// Bosh formatter options derived from this configuration.
    pub fn slash_options(&self) -> SlashOptions {
        SlashOptions {
            separator: self.separator.clone(),
            name_attribute: self.name_attribute.clone(),
        }
    }
}
