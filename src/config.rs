//! Layered configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults (5×5 table, prompt on)
//! 2. TOML file (`roborover.toml` in the working directory, or an explicit path)
//! 3. Environment variables `ROBOROVER_WIDTH` / `ROBOROVER_HEIGHT`
//! 4. Command-line flags (applied by the binary)

use crate::tabletop::{BoundsError, GridBounds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File looked up when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "roborover.toml";

/// Overrides `tabletop.width`.
pub const ENV_WIDTH: &str = "ROBOROVER_WIDTH";
/// Overrides `tabletop.height`.
pub const ENV_HEIGHT: &str = "ROBOROVER_HEIGHT";

/// Reasons configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable {name}={value:?} is not a valid size")]
    Env { name: &'static str, value: String },

    #[error("invalid tabletop: {0}")]
    Bounds(#[from] BoundsError),
}

/// Table dimensions in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletopConfig {
    /// Cells along the x axis.
    pub width: u32,

    /// Cells along the y axis.
    pub height: u32,
}

impl Default for TabletopConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

/// Top-level settings for a RoboRover run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Table dimensions.
    pub tabletop: TabletopConfig,

    /// Write an input prompt before each line.
    pub prompt: bool,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            tabletop: TabletopConfig::default(),
            prompt: true,
        }
    }
}

impl RoverConfig {
    /// Parses a TOML document. Missing keys fall back to defaults.
    pub fn from_toml(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads and parses the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw, path)
    }

    /// Loads defaults, then the file, then the process environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Overrides table size from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |name: &'static str| -> Result<Option<u32>, ConfigError> {
            lookup(name)
                .map(|value| {
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::Env { name, value })
                })
                .transpose()
        };
        if let Some(width) = parse(ENV_WIDTH)? {
            self.tabletop.width = width;
        }
        if let Some(height) = parse(ENV_HEIGHT)? {
            self.tabletop.height = height;
        }
        Ok(())
    }

    /// Validated bounds for the configured table.
    pub fn bounds(&self) -> Result<GridBounds, ConfigError> {
        Ok(GridBounds::with_size(
            self.tabletop.width,
            self.tabletop.height,
        )?)
    }
}
