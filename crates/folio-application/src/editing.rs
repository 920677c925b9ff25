//! Editing surface: the owner's view of the portfolio.
//!
//! Edits touch only the in-memory model and background selection. Nothing is
//! written until [`EditingSession::save`], which replaces the stored
//! snapshot wholesale. Recoverable failures are reported as [`Notice`]s.

use folio_core::background::{BackgroundReference, LayerStack, LocalHandle, PRESET_CATALOG, PlaybackPhase};
use folio_core::config::PlaybackSettings;
use folio_core::error::{FolioError, Result};
use folio_core::media::{MediaProbe, UploadCandidate};
use folio_core::profile::{ProfileField, ProfileModel, ProfileRecord};
use folio_core::snapshot::{PersistedSnapshot, ProfileStore, SnapshotOrigin, load_or_default};
use folio_infrastructure::LocalMediaRegistry;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::background_session::BackgroundSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short, non-fatal message for the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

pub struct EditingSession {
    store: Arc<dyn ProfileStore>,
    local_media: Arc<LocalMediaRegistry>,
    model: ProfileModel,
    background: BackgroundSession,
    notices: Vec<Notice>,
}

impl EditingSession {
    /// Opens the editing surface on the stored snapshot, or on defaults when
    /// there is none.
    pub async fn open(
        store: Arc<dyn ProfileStore>,
        local_media: Arc<LocalMediaRegistry>,
        probe: Arc<dyn MediaProbe>,
        settings: &PlaybackSettings,
    ) -> Self {
        let startup = load_or_default(store.as_ref()).await;
        let mut notices = Vec::new();
        if let SnapshotOrigin::Recovered(ref e) = startup.origin {
            if e.is_storage_unavailable() {
                notices.push(Notice::error(
                    "Storage Unavailable",
                    "Saved changes could not be loaded. Showing the default portfolio.",
                ));
            }
        }

        let mut background = BackgroundSession::new(local_media.clone(), probe, settings);
        background.select(startup.snapshot.background);

        Self {
            store,
            local_media,
            model: ProfileModel::new(startup.snapshot.profile),
            background,
            notices,
        }
    }

    pub fn profile(&self) -> &ProfileRecord {
        self.model.record()
    }

    pub fn background(&self) -> &BackgroundReference {
        self.background.reference()
    }

    pub fn layer_stack(&self) -> LayerStack {
        self.background.layer_stack()
    }

    /// The snapshot `save` would write right now.
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot::new(self.model.record().clone(), self.background.reference().clone())
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> &ProfileRecord {
        self.model.set_field(field, value)
    }

    pub fn add_skill(&mut self, name: &str) -> &ProfileRecord {
        self.model.add_skill(name)
    }

    pub fn remove_skill(&mut self, name: &str) -> &ProfileRecord {
        self.model.remove_skill(name)
    }

    /// Removes the video; the gradient shows on its own.
    pub fn use_gradient(&mut self) {
        self.background.select(BackgroundReference::None);
        self.notices
            .push(Notice::success("Video Removed", "Background video has been removed."));
    }

    pub fn select_preset(&mut self, id: &str) -> Result<()> {
        let preset = PRESET_CATALOG
            .find(id)
            .ok_or_else(|| FolioError::not_found("preset", id))?;
        self.background.select(BackgroundReference::preset(preset.id));
        Ok(())
    }

    pub fn select_external_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            self.background.select(BackgroundReference::None);
        } else {
            self.background.select(BackgroundReference::external(url));
        }
    }

    /// Accepts a local video file as the background.
    ///
    /// A rejected file adds an error notice and leaves the current
    /// background untouched.
    pub fn upload_local_file(&mut self, path: &Path) -> Result<LocalHandle> {
        let registered = self.local_media.register_file(path);
        self.accept_upload(registered)
    }

    /// Like [`Self::upload_local_file`] for a file already reachable at `url`.
    pub fn upload_candidate(
        &mut self,
        candidate: &UploadCandidate,
        url: impl Into<String>,
    ) -> Result<LocalHandle> {
        let registered = self.local_media.register_candidate(candidate, url);
        self.accept_upload(registered)
    }

    fn accept_upload(&mut self, registered: Result<LocalHandle>) -> Result<LocalHandle> {
        match registered {
            Ok(handle) => {
                self.background.select(BackgroundReference::LocalHandle {
                    handle: handle.clone(),
                });
                self.notices.push(Notice::success(
                    "Video Uploaded!",
                    "Your custom background video has been set.",
                ));
                Ok(handle)
            }
            Err(e) => {
                let notice = match &e {
                    FolioError::InvalidFileType { .. } => Notice::error(
                        "Invalid File",
                        "Please select a video file (MP4, WebM, MOV)",
                    ),
                    FolioError::FileTooLarge { .. } => Notice::error(
                        "File Too Large",
                        "Please select a video file smaller than 50MB",
                    ),
                    other => Notice::error("Upload Failed", other.to_string()),
                };
                tracing::info!("Background upload rejected: {}", e);
                self.notices.push(notice);
                Err(e)
            }
        }
    }

    /// Drives the background until it leaves `Loading`.
    pub async fn settle_background(&mut self) -> PlaybackPhase {
        self.background.settle().await
    }

    /// Writes the whole snapshot.
    ///
    /// Failures add an error notice and leave the in-memory state as it was.
    pub async fn save(&mut self) -> Result<()> {
        if let Err(e) = self.model.record().validate_for_save() {
            self.notices.push(Notice::error("Missing Image", e.to_string()));
            return Err(e);
        }

        let snapshot = self.snapshot();
        match self.store.save(&snapshot).await {
            Ok(()) => {
                tracing::info!("Portfolio saved");
                self.notices.push(Notice::success(
                    "Changes Saved!",
                    "Your portfolio has been updated successfully.",
                ));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to save portfolio: {}", e);
                self.notices.push(Notice::error("Save Failed", e.to_string()));
                Err(e)
            }
        }
    }

    /// Clears the store and restores the built-in defaults.
    pub async fn reset(&mut self) -> Result<()> {
        if let Err(e) = self.store.clear().await {
            tracing::warn!("Failed to clear portfolio: {}", e);
            self.notices.push(Notice::error("Reset Failed", e.to_string()));
            return Err(e);
        }

        let defaults = PersistedSnapshot::default();
        self.model = ProfileModel::new(defaults.profile);
        self.background.select(defaults.background);
        self.notices.push(Notice::success(
            "Portfolio Reset",
            "The default portfolio has been restored.",
        ));
        Ok(())
    }

    /// Tears down the background, releasing any leased local video.
    pub fn close(mut self) {
        self.background.teardown();
    }
}
