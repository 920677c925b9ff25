//! Key/value backends for the profile store.
//!
//! The site keeps its whole snapshot under one textual key, the way a browser
//! keeps it in local storage. These backends provide that contract.

use folio_core::error::{FolioError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::atomic_file::AtomicFile;

/// Durable textual key/value storage.
///
/// Implementations are blocking; async callers run them on a blocking thread.
/// Failures to reach the backend are `StorageUnavailable`; a value that is
/// present but is not text is `CorruptData`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces any prior value wholesale.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct DirKeyValueStore {
    root: PathBuf,
}

impl DirKeyValueStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FolioError::storage_unavailable(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(AtomicFile::new(self.root.join(format!("{}.json", key))))
    }
}

impl KeyValueStore for DirKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        let bytes = file.load().map_err(|e| {
            FolioError::storage_unavailable(format!(
                "Failed to read '{}': {}",
                file.path().display(),
                e
            ))
        })?;

        bytes
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|e| {
                    FolioError::corrupt_data(format!(
                        "'{}' is not valid UTF-8: {}",
                        file.path().display(),
                        e
                    ))
                })
            })
            .transpose()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        file.save(value).map_err(|e| {
            FolioError::storage_unavailable(format!(
                "Failed to write '{}': {}",
                file.path().display(),
                e
            ))
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        file.remove().map_err(|e| {
            FolioError::storage_unavailable(format!(
                "Failed to remove '{}': {}",
                file.path().display(),
                e
            ))
        })
    }
}

/// In-process store. Can be switched off to behave like disabled storage.
#[derive(Debug)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    available: AtomicBool,
}

impl Default for MemoryKeyValueStore {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When unavailable, every operation fails with `StorageUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(FolioError::storage_unavailable("Storage is disabled"));
        }
        self.entries
            .lock()
            .map_err(|e| FolioError::storage_unavailable(format!("Storage lock poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
