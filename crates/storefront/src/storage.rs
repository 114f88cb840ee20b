//! Key-value persistence, modelled on browser local storage.
//!
//! Values are plain strings; callers own their encoding (the loyalty ledger
//! stores a stringified integer, the menu editor a JSON document).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage key holding the loyalty point balance.
pub const LOYALTY_POINTS_KEY: &str = "loyaltyPoints";

/// Storage key holding the menu editor draft.
pub const MENU_DRAFT_KEY: &str = "menu";

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

/// String key to string value persistence.
pub trait KeyValueStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write did not reach the backing store.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and sessions without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store persisted as a single JSON object on disk.
///
/// The whole file is rewritten on every `set`; writes go to a sibling temp
/// file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store, starting empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON
    /// object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StorageError::Corrupt(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Storage file does not exist yet: {:?}", path);
                HashMap::new()
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| StorageError::Io(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(|e| StorageError::Io(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}
