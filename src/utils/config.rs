//! Configuration loading
//!
//! Configuration lives in a TOML file:
//!
//! ```toml
//! [render]
//! math_display = "unicode"      # unicode | latex | both
//! command_matching = "literal"  # literal | tokenized
//! color = true
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key is optional. The file is found through an explicit path, then
//! the `FAUST_CONFIG` environment variable; without either, defaults apply.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, Level};

use super::error::{FaustError, FaustResult};
use crate::core::options::RenderOptions;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "FAUST_CONFIG";

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Parsed log level
    pub fn level(&self) -> FaustResult<Level> {
        Level::from_str(self.level.trim()).map_err(|_| {
            FaustError::invalid_option(
                "log.level",
                format!("unknown level '{}'", self.level),
            )
        })
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
    pub log: LogConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Load configuration from a file. The file must exist.
    pub fn load(path: &Path) -> FaustResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|source| FaustError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.log.level()?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Resolve the config file from an explicit path or `FAUST_CONFIG`.
    ///
    /// Defaults apply only when neither names a file; a named file that
    /// cannot be read is an error.
    pub fn resolve(explicit: Option<&Path>) -> FaustResult<Self> {
        match Self::config_path(explicit) {
            Some(path) => Self::load(&path),
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
    }
}
