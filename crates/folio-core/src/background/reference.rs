//! The user's background selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::preset::PRESET_CATALOG;

/// Opaque identifier for a user-selected local video.
///
/// Handles are issued by the session's local media registry and are only
/// meaningful inside the session that issued them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalHandle(String);

impl LocalHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the backdrop should be. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BackgroundReference {
    /// Animated gradient, no video.
    #[default]
    None,
    Preset {
        id: String,
    },
    ExternalUrl {
        url: String,
    },
    LocalHandle {
        handle: LocalHandle,
    },
}

impl BackgroundReference {
    pub fn preset(id: impl Into<String>) -> Self {
        Self::Preset { id: id.into() }
    }

    pub fn external(url: impl Into<String>) -> Self {
        Self::ExternalUrl { url: url.into() }
    }

    /// The reference used when nothing has been saved yet.
    pub fn default_preset() -> Self {
        Self::preset(PRESET_CATALOG.default_preset().id)
    }

    /// Classifies a bare video URL, the only thing older snapshots stored.
    ///
    /// Empty means gradient, a preset's source URL maps back to that preset,
    /// anything else is an external URL.
    pub fn from_video_url(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() {
            return Self::None;
        }
        match PRESET_CATALOG.find_by_source(url) {
            Some(preset) => Self::preset(preset.id),
            None => Self::external(url),
        }
    }

    /// The concrete URL this reference points at, when it can be known
    /// without session state. Local handles have none.
    pub fn persistent_url(&self) -> Option<String> {
        match self {
            Self::None | Self::LocalHandle { .. } => None,
            Self::Preset { id } => PRESET_CATALOG.find(id).map(|p| p.source_url.to_string()),
            Self::ExternalUrl { url } => Some(url.clone()),
        }
    }

    pub fn local_handle(&self) -> Option<&LocalHandle> {
        match self {
            Self::LocalHandle { handle } => Some(handle),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for BackgroundReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "animated gradient"),
            Self::Preset { id } => write!(f, "preset '{}'", id),
            Self::ExternalUrl { url } => write!(f, "video {}", url),
            Self::LocalHandle { handle } => write!(f, "local file {}", handle),
        }
    }
}
