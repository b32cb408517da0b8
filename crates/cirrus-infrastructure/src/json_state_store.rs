//! JSON file-backed `StateStore` implementation.

use crate::paths::CirrusPaths;
use anyhow::{Context, Result};
use cirrus_core::error::CirrusError;
use cirrus_core::storage::StateStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each key as one `<key>.json` file in a directory.
///
/// This plays the role browser-local storage played in the original: a tiny
/// persistent key-value surface with no transactional guarantees. Reads that
/// fail for any reason report the key as absent; the domain layer decides
/// what absence means.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).context("Failed to create state directory")?;
        Ok(Self { dir })
    }

    /// Creates a store at the default location (`~/.config/cirrus/state/`).
    pub fn default_location() -> Result<Self> {
        let dir = CirrusPaths::state_dir().context("Failed to resolve state directory")?;
        Self::new(dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Some(raw),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(key, "state read failed: {}", err);
                }
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> cirrus_core::Result<()> {
        fs::write(self.key_path(key), value)
            .map_err(|err| CirrusError::io(format!("state write failed for '{key}': {err}")))
    }

    fn remove(&self, key: &str) -> cirrus_core::Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CirrusError::io(format!(
                "state remove failed for '{key}': {err}"
            ))),
        }
    }
}
