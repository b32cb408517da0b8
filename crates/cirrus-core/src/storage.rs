//! Key-value state store abstraction.
//!
//! Session and audit records live under two well-known keys in a small
//! key-value store, mirroring how the original kept them in browser-local
//! storage. This trait decouples the domain logic from the storage mechanism
//! (JSON files, in-memory map, etc.).

use crate::error::Result;
use std::collections::HashMap;
use std::sync::Mutex;

/// An abstract key-value store for serialized application state.
///
/// Implementations are expected to be cheap to read and write; values are
/// opaque serialized strings. Corruption handling is the caller's concern:
/// a value that fails to parse is treated by the domain layer as absent.
pub trait StateStore: Send + Sync {
    /// Returns the raw value under `key`, or `None` if missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory `StateStore` backed by a mutex-guarded map.
///
/// Used by tests and anywhere persistence across runs is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
