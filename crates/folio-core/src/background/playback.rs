//! Background playback state machine.
//!
//! ```text
//!            request(chain)                 on_loaded
//!   Idle ─────────────────────▶ Loading ───────────────▶ Loaded
//!    ▲                            │  ▲
//!    │ request([]) / reset        │  │ on_error, more candidates
//!    │                            │  └──────────┘
//!    │                            │ on_error, chain exhausted
//!    │                            ▼
//!    └──────────────────────── Errored
//! ```
//!
//! Every load attempt carries a [`LoadTicket`] stamped with the controller's
//! generation. Signals are honoured only for the current ticket and only while
//! `Loading`; anything else is stale and ignored.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaybackPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Transient playback state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub phase: PlaybackPhase,
    pub active_source_url: Option<String>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            active_source_url: None,
        }
    }
}

/// Why a source could not be played. Never shown to visitors: the gradient
/// simply stays up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaFailure {
    #[error("network error")]
    Network,
    #[error("source not found")]
    NotFound,
    #[error("unsupported format")]
    UnsupportedFormat,
    #[error("timed out while buffering")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Identifies one load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    url: String,
}

impl LoadTicket {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Result of feeding a signal into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Stale or duplicate signal; nothing changed.
    Ignored,
    Loaded,
    /// The failed source had a successor; a new attempt started.
    Advanced(LoadTicket),
    /// Every candidate failed; the gradient is the final layer.
    Exhausted,
}

/// What a renderer should show on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layer", content = "url", rename_all = "camelCase")]
pub enum DisplayLayer {
    Gradient,
    Video(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoLayer {
    pub url: String,
    pub visible: bool,
}

/// Full layer stack. The gradient is always mounted and cross-fades with the
/// video, so reverting to it after an error is instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStack {
    pub gradient_visible: bool,
    pub video: Option<VideoLayer>,
}

/// Tracks the load lifecycle of the background for one mounted surface.
#[derive(Debug, Default)]
pub struct BackgroundPlaybackController {
    state: PlaybackState,
    generation: u64,
    chain: Vec<String>,
    cursor: usize,
}

impl BackgroundPlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase
    }

    /// Starts loading a new candidate chain.
    ///
    /// Returns the ticket of the first attempt, or `None` when the chain is
    /// empty (gradient, `Idle`) or identical to the current one (no-op; a
    /// failed source is never retried without a new reference).
    pub fn request(&mut self, candidates: Vec<String>) -> Option<LoadTicket> {
        if candidates == self.chain {
            return None;
        }

        self.generation += 1;
        self.chain = candidates;
        self.cursor = 0;
        self.state = PlaybackState::default();

        if self.chain.is_empty() {
            tracing::debug!(generation = self.generation, "No candidates, showing gradient");
            return None;
        }
        Some(self.begin_attempt())
    }

    /// The ticket of the attempt currently in flight, if any.
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        match (self.state.phase, &self.state.active_source_url) {
            (PlaybackPhase::Loading, Some(url)) => Some(LoadTicket {
                generation: self.generation,
                url: url.clone(),
            }),
            _ => None,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// The source buffered enough data to start playing.
    pub fn on_loaded(&mut self, ticket: &LoadTicket) -> PlaybackOutcome {
        if !self.accepts(ticket) {
            return PlaybackOutcome::Ignored;
        }
        tracing::debug!(url = %ticket.url, "Background video loaded");
        self.state.phase = PlaybackPhase::Loaded;
        PlaybackOutcome::Loaded
    }

    /// The source failed to load. Falls through to the next candidate, or
    /// settles on `Errored` when the chain is exhausted.
    pub fn on_error(&mut self, ticket: &LoadTicket, failure: MediaFailure) -> PlaybackOutcome {
        if !self.accepts(ticket) {
            return PlaybackOutcome::Ignored;
        }
        tracing::debug!(url = %ticket.url, %failure, "Background video failed");

        if self.cursor + 1 < self.chain.len() {
            self.cursor += 1;
            self.generation += 1;
            return PlaybackOutcome::Advanced(self.begin_attempt());
        }

        self.state.phase = PlaybackPhase::Errored;
        PlaybackOutcome::Exhausted
    }

    /// Teardown: back to `Idle`, every outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.chain.clear();
        self.cursor = 0;
        self.state = PlaybackState::default();
    }

    pub fn layer(&self) -> DisplayLayer {
        match (self.state.phase, &self.state.active_source_url) {
            (PlaybackPhase::Loaded, Some(url)) => DisplayLayer::Video(url.clone()),
            _ => DisplayLayer::Gradient,
        }
    }

    pub fn layer_stack(&self) -> LayerStack {
        let loaded = self.state.phase == PlaybackPhase::Loaded;
        LayerStack {
            gradient_visible: !loaded,
            video: self.state.active_source_url.as_ref().map(|url| VideoLayer {
                url: url.clone(),
                visible: loaded,
            }),
        }
    }

    fn accepts(&self, ticket: &LoadTicket) -> bool {
        self.is_current(ticket) && self.state.phase == PlaybackPhase::Loading
    }

    fn begin_attempt(&mut self) -> LoadTicket {
        let url = self.chain[self.cursor].clone();
        self.state = PlaybackState {
            phase: PlaybackPhase::Loading,
            active_source_url: Some(url.clone()),
        };
        LoadTicket {
            generation: self.generation,
            url,
        }
    }
}
