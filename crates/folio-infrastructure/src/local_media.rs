//! Session-scoped registry of user-selected local videos.
//!
//! Accepted files get an opaque [`LocalHandle`] that maps to a playable
//! `file://` URL for as long as the registry lives. Handles are never
//! written to disk with their URL; a later session cannot resolve them.

use folio_core::background::{LocalHandle, LocalMediaSource};
use folio_core::error::{FolioError, Result};
use folio_core::media::{UploadCandidate, validate_upload};
use reqwest::Url;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Infers the MIME type from a filename extension.
fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[derive(Debug, Default)]
pub struct LocalMediaRegistry {
    handles: Mutex<HashMap<LocalHandle, String>>,
}

impl LocalMediaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a file on disk and registers it.
    ///
    /// The MIME type comes from the extension and the size from metadata.
    /// Rejected files leave the registry untouched.
    pub fn register_file(&self, path: &Path) -> Result<LocalHandle> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            FolioError::io(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(FolioError::io(format!("'{}' is not a file", path.display())));
        }

        let candidate = UploadCandidate {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            mime_type: infer_mime_type(path),
            size: metadata.len(),
        };
        validate_upload(&candidate)?;

        let absolute = path.canonicalize().map_err(|e| {
            FolioError::io(format!("Failed to resolve '{}': {}", path.display(), e))
        })?;
        let url = Url::from_file_path(&absolute).map_err(|_| {
            FolioError::io(format!("Cannot build a file URL for '{}'", absolute.display()))
        })?;

        self.insert(&candidate, url.to_string())
    }

    /// Validates a candidate that is already reachable at `url`.
    pub fn register_candidate(
        &self,
        candidate: &UploadCandidate,
        url: impl Into<String>,
    ) -> Result<LocalHandle> {
        validate_upload(candidate)?;
        self.insert(candidate, url.into())
    }

    /// Number of handles not yet released.
    pub fn active_count(&self) -> usize {
        self.handles.lock().map(|h| h.len()).unwrap_or(0)
    }

    fn insert(&self, candidate: &UploadCandidate, url: String) -> Result<LocalHandle> {
        let handle = LocalHandle::new(format!("local-{}", uuid::Uuid::new_v4()));
        let mut handles = self
            .handles
            .lock()
            .map_err(|e| FolioError::internal(format!("Local media registry poisoned: {}", e)))?;
        handles.insert(handle.clone(), url);

        tracing::info!(
            "Registered local video '{}' ({} bytes) as {}",
            candidate.file_name,
            candidate.size,
            handle
        );
        Ok(handle)
    }
}

impl LocalMediaSource for LocalMediaRegistry {
    fn resolve(&self, handle: &LocalHandle) -> Option<String> {
        self.handles.lock().ok()?.get(handle).cloned()
    }

    fn release(&self, handle: &LocalHandle) -> bool {
        let released = self
            .handles
            .lock()
            .map(|mut h| h.remove(handle).is_some())
            .unwrap_or(false);
        if released {
            tracing::debug!("Released local video {}", handle);
        } else {
            tracing::warn!("Local video {} was not registered or already released", handle);
        }
        released
    }
}
