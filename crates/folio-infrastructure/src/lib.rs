pub mod config_service;
pub mod dto;
pub mod local_media;
pub mod media_probe;
pub mod paths;
pub mod profile_store;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::local_media::LocalMediaRegistry;
pub use crate::media_probe::HttpMediaProbe;
pub use crate::paths::FolioPaths;
pub use crate::profile_store::KeyValueProfileStore;
pub use crate::storage::{DirKeyValueStore, KeyValueStore, MemoryKeyValueStore};
