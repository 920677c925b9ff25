//! Persisted snapshot domain module.
//!
//! A snapshot is the complete unit written by the editing surface and read by
//! the public view: the profile plus the background reference.

mod model;
mod repository;

pub use model::PersistedSnapshot;
pub use repository::{ProfileStore, SnapshotOrigin, StartupSnapshot, load_or_default};
