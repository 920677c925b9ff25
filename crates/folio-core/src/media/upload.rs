//! File input contract for background uploads.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Only `video/*` files are accepted.
pub const ACCEPTED_MIME_PREFIX: &str = "video/";

/// 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// A file the owner picked as background, before it is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

/// Validates a candidate against the file input contract.
///
/// The type is checked before the size, so a large non-video file reports
/// `InvalidFileType`.
pub fn validate_upload(candidate: &UploadCandidate) -> Result<()> {
    if !candidate.mime_type.starts_with(ACCEPTED_MIME_PREFIX) {
        return Err(FolioError::InvalidFileType {
            mime_type: candidate.mime_type.clone(),
        });
    }
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(FolioError::FileTooLarge {
            size: candidate.size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime_type: &str, size: u64) -> UploadCandidate {
        UploadCandidate {
            file_name: "clip".to_string(),
            mime_type: mime_type.to_string(),
            size,
        }
    }

    #[test]
    fn test_accepts_video_within_limit() {
        assert!(validate_upload(&candidate("video/mp4", 10 * 1024 * 1024)).is_ok());
        assert!(validate_upload(&candidate("video/webm", MAX_UPLOAD_BYTES)).is_ok());
    }

    #[test]
    fn test_rejects_sixty_mebibytes() {
        let err = validate_upload(&candidate("video/mp4", 60 * 1024 * 1024)).unwrap_err();
        assert_eq!(
            err,
            FolioError::FileTooLarge {
                size: 60 * 1024 * 1024,
                limit: MAX_UPLOAD_BYTES
            }
        );
    }

    #[test]
    fn test_rejects_non_video() {
        let err = validate_upload(&candidate("document/pdf", 1024)).unwrap_err();
        assert!(matches!(err, FolioError::InvalidFileType { .. }));
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let err = validate_upload(&candidate("image/png", MAX_UPLOAD_BYTES + 1)).unwrap_err();
        assert!(matches!(err, FolioError::InvalidFileType { .. }));
    }
}
