//! Unified path management for cirrus configuration and state files.
//!
//! All cirrus data lives under the platform config directory:
//!
//! ```text
//! ~/.config/cirrus/            # Config directory
//! ├── config.toml              # Application configuration
//! └── state/                   # Key-value state store
//!     ├── app_session.json     # Current session record
//!     └── auditLog.json        # Audit entry sequence
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for cirrus.
pub struct CirrusPaths;

impl CirrusPaths {
    /// Returns the cirrus configuration directory (e.g., `~/.config/cirrus/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("cirrus"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the key-value state files.
    pub fn state_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("state"))
    }
}
