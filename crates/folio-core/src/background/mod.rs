//! Background media domain module.
//!
//! Decides what is painted behind the public site: a video when one can be
//! played, the animated gradient otherwise.
//!
//! # Module Structure
//!
//! - `preset`: The built-in catalog of stock background videos
//! - `reference`: The user's abstract background selection
//! - `resolver`: Reference → ordered candidate URLs
//! - `playback`: The load-lifecycle state machine and render layers

mod playback;
mod preset;
mod reference;
mod resolver;

pub use playback::{
    BackgroundPlaybackController, DisplayLayer, LayerStack, LoadTicket, MediaFailure,
    PlaybackOutcome, PlaybackPhase, PlaybackState, VideoLayer,
};
pub use preset::{PRESET_CATALOG, PresetCatalog, VideoPreset};
pub use reference::{BackgroundReference, LocalHandle};
pub use resolver::{BackgroundResolver, LocalMediaSource, NoLocalMedia, Resolution};
