//! Error types for the Folio application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Folio workspace.
///
/// Every variant is recoverable: the editing surface turns them into notices
/// and the public view falls back to built-in defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolioError {
    /// The durable store could not be read or written (disabled, quota, I/O).
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// The stored snapshot exists but cannot be parsed into the expected shape.
    #[error("Corrupt data: {message}")]
    CorruptData { message: String },

    /// An uploaded background file is not a video.
    #[error("Invalid file type: '{mime_type}' (expected video/*)")]
    InvalidFileType { mime_type: String },

    /// An uploaded background file exceeds the size limit.
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// User input failed validation (contact form, required media fields).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a StorageUnavailable error
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Creates a CorruptData error
    pub fn corrupt_data(message: impl Into<String>) -> Self {
        Self::CorruptData {
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a StorageUnavailable error
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }

    /// Check if this is a CorruptData error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }

    /// Check if this error came from upload validation.
    pub fn is_upload_rejection(&self) -> bool {
        matches!(self, Self::InvalidFileType { .. } | Self::FileTooLarge { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<version_migrate::MigrationError> for FolioError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            MigrationError::IoError { .. } => Self::Io {
                message: err.to_string(),
            },
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// Conversion from anyhow::Error
impl From<anyhow::Error> for FolioError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_rejections_are_classified() {
        let err = FolioError::FileTooLarge {
            size: 60,
            limit: 50,
        };
        assert!(err.is_upload_rejection());
        assert!(!err.is_storage_unavailable());

        let err = FolioError::InvalidFileType {
            mime_type: "application/pdf".to_string(),
        };
        assert!(err.is_upload_rejection());
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: FolioError = io.into();
        match err {
            FolioError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FolioError::storage_unavailable("quota exceeded").to_string(),
            "Storage unavailable: quota exceeded"
        );
        assert_eq!(
            FolioError::not_found("preset", "nope").to_string(),
            "Entity not found: preset 'nope'"
        );
    }
}
