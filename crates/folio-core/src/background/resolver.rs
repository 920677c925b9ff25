//! Background resolution: reference → candidate URLs.

use std::sync::Arc;

use super::preset::{PRESET_CATALOG, PresetCatalog};
use super::reference::{BackgroundReference, LocalHandle};

/// Session-scoped lookup for user-selected local videos.
///
/// Whoever holds a handle must release it exactly once, when the reference
/// is replaced or the surface is torn down.
pub trait LocalMediaSource: Send + Sync {
    /// Returns the playable URL for a handle registered in this session.
    fn resolve(&self, handle: &LocalHandle) -> Option<String>;

    /// Releases a handle. Returns `false` if it was not registered (already
    /// released, or issued by another session).
    fn release(&self, handle: &LocalHandle) -> bool;
}

/// A media source with no local files, for surfaces that never accept uploads.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocalMedia;

impl LocalMediaSource for NoLocalMedia {
    fn resolve(&self, _handle: &LocalHandle) -> Option<String> {
        None
    }

    fn release(&self, _handle: &LocalHandle) -> bool {
        false
    }
}

/// Ordered candidate URLs for a reference, most preferred first.
///
/// An empty list means the gradient is shown directly. Every reference kind
/// resolves to at most one URL today; the playback controller accepts longer
/// chains from other resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub candidates: Vec<String>,
}

impl Resolution {
    fn single(url: impl Into<String>) -> Self {
        Self {
            candidates: vec![url.into()],
        }
    }

    pub fn is_gradient(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Turns a [`BackgroundReference`] into a candidate chain.
#[derive(Clone)]
pub struct BackgroundResolver {
    catalog: &'static PresetCatalog,
    local_media: Arc<dyn LocalMediaSource>,
}

impl BackgroundResolver {
    pub fn new(local_media: Arc<dyn LocalMediaSource>) -> Self {
        Self {
            catalog: &PRESET_CATALOG,
            local_media,
        }
    }

    pub fn without_local_media() -> Self {
        Self::new(Arc::new(NoLocalMedia))
    }

    pub fn local_media(&self) -> &Arc<dyn LocalMediaSource> {
        &self.local_media
    }

    pub fn resolve(&self, reference: &BackgroundReference) -> Resolution {
        match reference {
            BackgroundReference::None => Resolution::default(),
            BackgroundReference::Preset { id } => match self.catalog.find(id) {
                Some(preset) => Resolution::single(preset.source_url),
                None => {
                    tracing::debug!(preset_id = %id, "Unknown preset, using gradient");
                    Resolution::default()
                }
            },
            BackgroundReference::ExternalUrl { url } if url.trim().is_empty() => {
                Resolution::default()
            }
            BackgroundReference::ExternalUrl { url } => Resolution::single(url.clone()),
            BackgroundReference::LocalHandle { handle } => {
                match self.local_media.resolve(handle) {
                    Some(url) => Resolution::single(url),
                    None => {
                        tracing::debug!(%handle, "Local handle not registered in this session");
                        Resolution::default()
                    }
                }
            }
        }
    }
}

impl Default for BackgroundResolver {
    fn default() -> Self {
        Self::without_local_media()
    }
}
