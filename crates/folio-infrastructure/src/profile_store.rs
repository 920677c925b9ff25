//! Key/value-backed implementation of `ProfileStore`.
//!
//! The whole snapshot is one versioned JSON document under a single key.
//! Values written before versioning are read as 1.0.0 and migrated.

use async_trait::async_trait;
use folio_core::config::DEFAULT_STORAGE_KEY;
use folio_core::error::{FolioError, Result};
use folio_core::snapshot::{PersistedSnapshot, ProfileStore};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task;

use crate::dto::{SNAPSHOT_ENTITY, create_snapshot_migrator, with_legacy_version};
use crate::storage::{DirKeyValueStore, KeyValueStore, MemoryKeyValueStore};

/// Stores the snapshot under one key of a `KeyValueStore`.
#[derive(Clone)]
pub struct KeyValueProfileStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// File-backed store rooted at `dir`, using the default key.
    pub fn in_dir(dir: PathBuf) -> Self {
        Self::new(Arc::new(DirKeyValueStore::new(dir)), DEFAULT_STORAGE_KEY)
    }

    /// Process-local store, mainly for tests and previews.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()), DEFAULT_STORAGE_KEY)
    }

    fn decode(key: &str, raw: &str) -> Result<PersistedSnapshot> {
        let json_value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
            FolioError::corrupt_data(format!("Failed to parse '{}' as JSON: {}", key, e))
        })?;

        let migrator = create_snapshot_migrator();
        migrator
            .load_flat_from(SNAPSHOT_ENTITY, with_legacy_version(json_value))
            .map_err(|e| FolioError::corrupt_data(format!("Failed to migrate '{}': {}", key, e)))
    }

    fn encode(snapshot: PersistedSnapshot) -> Result<String> {
        let migrator = create_snapshot_migrator();
        migrator
            .save_domain_flat(SNAPSHOT_ENTITY, snapshot)
            .map_err(|e| FolioError::Serialization {
                format: "JSON".to_string(),
                message: format!("Failed to serialize snapshot: {}", e),
            })
    }

    fn load_sync(store: &dyn KeyValueStore, key: &str) -> Result<Option<PersistedSnapshot>> {
        match store.get(key)? {
            Some(raw) => Self::decode(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn save_sync(store: &dyn KeyValueStore, key: &str, snapshot: PersistedSnapshot) -> Result<()> {
        let serialized = Self::encode(snapshot)?;
        store.set(key, &serialized)
    }
}

fn join_error(e: task::JoinError) -> FolioError {
    FolioError::storage_unavailable(format!("Failed to spawn blocking task: {}", e))
}

#[async_trait]
impl ProfileStore for KeyValueProfileStore {
    async fn save(&self, snapshot: &PersistedSnapshot) -> Result<()> {
        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let snapshot = snapshot.clone();

        task::spawn_blocking(move || Self::save_sync(store.as_ref(), &key, snapshot))
            .await
            .map_err(join_error)??;

        tracing::debug!("Saved snapshot under '{}'", self.key);
        Ok(())
    }

    async fn load(&self) -> Result<Option<PersistedSnapshot>> {
        let store = Arc::clone(&self.store);
        let key = self.key.clone();

        task::spawn_blocking(move || Self::load_sync(store.as_ref(), &key))
            .await
            .map_err(join_error)?
    }

    async fn clear(&self) -> Result<()> {
        let store = Arc::clone(&self.store);
        let key = self.key.clone();

        task::spawn_blocking(move || store.remove(&key))
            .await
            .map_err(join_error)?
    }
}
