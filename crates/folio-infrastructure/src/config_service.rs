//! Configuration service implementation.
//!
//! Loads [`FolioConfig`] from `config.toml` and caches it. A missing file
//! yields defaults; a malformed one is a TOML serialization error.

use folio_core::config::FolioConfig;
use folio_core::error::{FolioError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::paths::FolioPaths;
use crate::storage::DirKeyValueStore;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<FolioConfig>>>,
}

impl ConfigService {
    /// Uses the platform config file (`~/.config/folio/config.toml`).
    pub fn new() -> Self {
        Self {
            path: FolioPaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses an explicit config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<FolioConfig> {
        if let Ok(read_lock) = self.config.read() {
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = match &self.path {
            Some(path) => Self::load_from(path)?,
            None => {
                tracing::warn!("No config directory available, using defaults");
                FolioConfig::default()
            }
        };

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Reads one config file. Missing means defaults.
    pub fn load_from(path: &Path) -> Result<FolioConfig> {
        if !path.exists() {
            tracing::debug!("Config file '{}' not found, using defaults", path.display());
            return Ok(FolioConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FolioError::io(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The snapshot store backend for a config: its `storage.dir`, or the
    /// platform store directory.
    pub fn store_backend(config: &FolioConfig) -> Result<DirKeyValueStore> {
        let dir = match &config.storage.dir {
            Some(dir) => dir.clone(),
            None => FolioPaths::store_dir().map_err(|e| FolioError::config(e.to_string()))?,
        };
        Ok(DirKeyValueStore::new(dir))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigService::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_load_and_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndir = \"/srv/folio\"\n\n[playback]\nload_timeout_ms = 500\n",
        )
        .unwrap();

        let service = ConfigService::with_path(path.clone());
        let config = service.get_config().unwrap();
        assert_eq!(config.storage.dir, Some(PathBuf::from("/srv/folio")));
        assert_eq!(config.storage.key, "portfolioData");
        assert_eq!(config.playback.load_timeout_ms, 500);

        std::fs::write(&path, "[playback]\nload_timeout_ms = 900\n").unwrap();
        assert_eq!(service.get_config().unwrap().playback.load_timeout_ms, 500);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().playback.load_timeout_ms, 900);
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[playback\nload_timeout_ms = ").unwrap();

        let err = ConfigService::load_from(&path).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_store_backend_honors_override() {
        let mut config = FolioConfig::default();
        config.storage.dir = Some(PathBuf::from("/tmp/folio-store"));
        let backend = ConfigService::store_backend(&config).unwrap();
        assert_eq!(backend.root(), Path::new("/tmp/folio-store"));
    }
}
