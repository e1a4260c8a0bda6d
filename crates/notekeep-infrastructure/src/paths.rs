//! Platform path resolution for configuration, data and logs.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/notekeep/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/notekeep/     # Data directory
//! ├── store/                   # JsonDirDocumentStore root
//! │   ├── notes/
//! │   └── profiles/
//! └── logs/                    # Application logs
//!     └── notekeep.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "notekeep";

/// Errors that can occur during path resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Cannot find the platform config directory")]
    ConfigDirNotFound,

    #[error("Cannot find the platform data directory")]
    DataDirNotFound,
}

/// Resolves Notekeep's directories.
///
/// A `data_dir` override (from configuration or the command line) replaces the
/// platform data directory; everything else derives from it.
#[derive(Debug, Clone, Default)]
pub struct NotekeepPaths {
    data_dir_override: Option<PathBuf>,
}

impl NotekeepPaths {
    pub fn new(data_dir_override: Option<PathBuf>) -> Self {
        Self { data_dir_override }
    }

    /// Returns the Notekeep configuration directory (e.g. `~/.config/notekeep/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the data directory, honouring the override.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_dir_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Root of the JSON document store.
    pub fn store_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("store"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }
}
