//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: The persisted profile record and its field enumeration
//! - `editor`: The editable in-memory model with validated mutations
//!
//! # Usage
//!
//! ```ignore
//! use folio_core::profile::{ProfileField, ProfileModel, ProfileRecord};
//! ```

mod editor;
mod model;

// Re-export public API
pub use editor::ProfileModel;
pub use model::{ProfileField, ProfileRecord};
