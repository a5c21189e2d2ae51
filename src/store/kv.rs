//! Key-value persistence boundary.
//!
//! Each record store serializes its whole collection as one JSON array under
//! a fixed key and rewrites it on every mutation. There is no incremental
//! append format and no schema versioning; writes are synchronous and
//! best-effort.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const MOOD_ENTRIES_KEY: &str = "MoodEntries";
pub const CUSTOM_HABITS_KEY: &str = "CustomHabits";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
}

pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Load a persisted collection. A missing key, unreadable file, or corrupt
/// payload all read as "no prior data" (logged, never surfaced).
pub(crate) fn load_collection<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Option<Vec<T>> {
    let bytes = match storage.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted collection, starting empty");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(collection) => Some(collection),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding corrupt persisted collection");
            None
        }
    }
}

/// Rewrite a collection under its key. A failed encode or write is skipped
/// (logged); the in-memory collection stays authoritative.
pub(crate) fn save_collection<T: Serialize>(storage: &dyn KeyValueStore, key: &str, items: &[T]) {
    let bytes = match serde_json::to_vec(items) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to encode collection, write skipped");
            return;
        }
    };

    if let Err(e) = storage.set(key, &bytes) {
        tracing::warn!(key, error = %e, "failed to write collection, write skipped");
    }
}
