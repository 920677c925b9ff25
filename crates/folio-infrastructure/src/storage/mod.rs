//! Storage layer: atomic file writes and key/value backends.

mod atomic_file;
mod kv_store;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use kv_store::{DirKeyValueStore, KeyValueStore, MemoryKeyValueStore};
