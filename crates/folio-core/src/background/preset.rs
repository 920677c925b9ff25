//! Built-in background video presets.
//!
//! The catalog is fixed at compile time: one default entry (the owner's own
//! animation) followed by three stock clips.

use serde::Serialize;

/// A curated background video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPreset {
    /// Stable identifier used in stored references
    pub id: &'static str,
    pub display_name: &'static str,
    pub source_url: &'static str,
    pub thumbnail_url: &'static str,
    pub description: &'static str,
    /// Marks the entry used when nothing has been saved yet
    pub is_default: bool,
}

pub static PRESET_CATALOG: PresetCatalog = PresetCatalog {
    entries: &[
        VideoPreset {
            id: "custom-animation",
            display_name: "Custom Animation",
            source_url: "https://files.catbox.moe/v3dqyc.mp4",
            thumbnail_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&w=400&h=300",
            description: "Your personal custom animation video",
            is_default: true,
        },
        VideoPreset {
            id: "abstract-waves",
            display_name: "Abstract Waves",
            source_url: "https://cdn.pixabay.com/video/2021/08/04/84737-588785835_large.mp4",
            thumbnail_url: "https://cdn.pixabay.com/photo/2021/08/04/13/06/software-developer-6521720_960_720.jpg",
            description: "Flowing abstract waves with purple and blue gradients",
            is_default: false,
        },
        VideoPreset {
            id: "cosmic-particles",
            display_name: "Cosmic Particles",
            source_url: "https://cdn.pixabay.com/video/2022/10/28/137019-767055818_large.mp4",
            thumbnail_url: "https://cdn.pixabay.com/photo/2022/10/28/02/05/space-7553186_960_720.jpg",
            description: "Floating particles in deep space with stars",
            is_default: false,
        },
        VideoPreset {
            id: "geometric-shapes",
            display_name: "Geometric Motion",
            source_url: "https://cdn.pixabay.com/video/2022/03/29/113252-691831010_large.mp4",
            thumbnail_url: "https://cdn.pixabay.com/photo/2022/03/29/07/14/geometric-7098023_960_720.jpg",
            description: "Dynamic geometric shapes and patterns",
            is_default: false,
        },
    ],
};

/// Read-only view over the preset list.
#[derive(Debug)]
pub struct PresetCatalog {
    entries: &'static [VideoPreset],
}

impl PresetCatalog {
    pub fn all(&self) -> &'static [VideoPreset] {
        self.entries
    }

    pub fn find(&self, id: &str) -> Option<&'static VideoPreset> {
        self.entries.iter().find(|preset| preset.id == id)
    }

    /// Looks a preset up by its video URL (used when reading legacy snapshots
    /// that only stored the URL).
    pub fn find_by_source(&self, url: &str) -> Option<&'static VideoPreset> {
        self.entries.iter().find(|preset| preset.source_url == url)
    }

    pub fn default_preset(&self) -> &'static VideoPreset {
        self.entries
            .iter()
            .find(|preset| preset.is_default)
            .unwrap_or(&self.entries[0])
    }
}
