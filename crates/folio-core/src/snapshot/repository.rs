//! Profile store trait.

use async_trait::async_trait;

use super::model::PersistedSnapshot;
use crate::error::{FolioError, Result};

/// Durable persistence of the snapshot under a single well-known key.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Replaces the stored snapshot. A concurrent reader observes either the
    /// previous value or the new one, never a partial write.
    ///
    /// Fails with `StorageUnavailable` when the backend cannot be written.
    async fn save(&self, snapshot: &PersistedSnapshot) -> Result<()>;

    /// Reads the stored snapshot.
    ///
    /// - `Ok(None)`: nothing was ever saved (or it was cleared)
    /// - `Err(CorruptData)`: a value exists but does not parse
    /// - `Err(StorageUnavailable)`: the backend cannot be read
    async fn load(&self) -> Result<Option<PersistedSnapshot>>;

    /// Removes the stored snapshot. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;
}

/// Where a startup snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOrigin {
    Stored,
    /// Nothing saved yet
    Defaults,
    /// Loading failed and defaults were substituted
    Recovered(FolioError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupSnapshot {
    pub snapshot: PersistedSnapshot,
    pub origin: SnapshotOrigin,
}

/// Loads the snapshot, substituting built-in defaults on absence or failure.
///
/// Missing and corrupt data both yield defaults; they differ only in the
/// reported origin and the diagnostic logged here.
pub async fn load_or_default(store: &dyn ProfileStore) -> StartupSnapshot {
    match store.load().await {
        Ok(Some(snapshot)) => StartupSnapshot {
            snapshot,
            origin: SnapshotOrigin::Stored,
        },
        Ok(None) => {
            tracing::debug!("No stored snapshot, using built-in defaults");
            StartupSnapshot {
                snapshot: PersistedSnapshot::default(),
                origin: SnapshotOrigin::Defaults,
            }
        }
        Err(e) => {
            if e.is_corrupt_data() {
                tracing::warn!("Ignoring corrupt snapshot: {}", e);
            } else {
                tracing::warn!("Could not load snapshot, using defaults: {}", e);
            }
            StartupSnapshot {
                snapshot: PersistedSnapshot::default(),
                origin: SnapshotOrigin::Recovered(e),
            }
        }
    }
}
