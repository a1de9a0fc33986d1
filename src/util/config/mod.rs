//! supertiny configuration file
//!
//! Project-level configuration lives in `supertiny.toml`:
//!
//! ```toml
//! [compile]
//! transform = "recursive"   # or "visitor"
//! trace_traversal = false
//!
//! [log]
//! level = "debug"
//! ```
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high -> low):
//! 1. CLI arguments
//! 2. Config file (--config PATH, or ./supertiny.toml)
//! 3. Default values
//! ```

use crate::frontend::config::CompileConfig;
use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "supertiny.toml";

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToolConfig {
    /// Pipeline settings
    #[serde(default)]
    pub compile: CompileConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Minimum level printed
    #[serde(default)]
    pub level: LogLevel,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<ToolConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load configuration from an explicit file; the file must exist
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `supertiny.toml` from `dir`
/// Returns default config if file doesn't exist
pub fn load_project_config(dir: &Path) -> Result<ToolConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        return Ok(ToolConfig::default());
    }
    tracing::debug!("Loading config from {}", path.display());
    load_config(&path)
}
