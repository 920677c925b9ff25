//! Application configuration model (`config.toml`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// The storage key the site has always used for its snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "portfolioData";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FolioConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub playback: PlaybackSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// Overrides the platform store directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSettings {
    /// How long a source may stay in `Loading` before it counts as failed.
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,
}

impl PlaybackSettings {
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            load_timeout_ms: default_load_timeout_ms(),
        }
    }
}

fn default_load_timeout_ms() -> u64 {
    15_000
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
