pub mod background;
pub mod config;
pub mod contact;
pub mod error;
pub mod media;
pub mod profile;
pub mod snapshot;

// Re-export common error type
pub use error::{FolioError, Result};
