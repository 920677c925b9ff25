//! Background session: one surface's selected backdrop and its playback.
//!
//! Couples the reference the owner picked with the resolver, the playback
//! controller and a probe that reports load signals. Owns the lease on a
//! local video handle while that handle is the active reference.

use folio_core::background::{
    BackgroundPlaybackController, BackgroundReference, BackgroundResolver, LayerStack,
    LoadTicket, LocalHandle, LocalMediaSource, MediaFailure, PlaybackOutcome, PlaybackPhase,
};
use folio_core::config::PlaybackSettings;
use folio_core::media::MediaProbe;
use std::sync::Arc;
use std::time::Duration;

pub struct BackgroundSession {
    reference: BackgroundReference,
    resolver: BackgroundResolver,
    controller: BackgroundPlaybackController,
    probe: Arc<dyn MediaProbe>,
    load_timeout: Duration,
    lease: Option<LocalHandle>,
}

impl BackgroundSession {
    pub fn new(
        local_media: Arc<dyn LocalMediaSource>,
        probe: Arc<dyn MediaProbe>,
        settings: &PlaybackSettings,
    ) -> Self {
        Self {
            reference: BackgroundReference::None,
            resolver: BackgroundResolver::new(local_media),
            controller: BackgroundPlaybackController::new(),
            probe,
            load_timeout: settings.load_timeout(),
            lease: None,
        }
    }

    pub fn reference(&self) -> &BackgroundReference {
        &self.reference
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.controller.phase()
    }

    pub fn controller(&self) -> &BackgroundPlaybackController {
        &self.controller
    }

    pub fn layer_stack(&self) -> LayerStack {
        self.controller.layer_stack()
    }

    /// Makes `reference` the active background and starts loading it.
    ///
    /// A previously leased local handle is released when it stops being the
    /// active reference. Returns the ticket of the first load attempt, if a
    /// new attempt started.
    pub fn select(&mut self, reference: BackgroundReference) -> Option<LoadTicket> {
        if self.lease.as_ref() != reference.local_handle() {
            self.release_lease();
        }
        if self.lease.is_none() {
            // Handles from an earlier session are not ours to release.
            self.lease = reference
                .local_handle()
                .filter(|handle| self.resolver.local_media().resolve(handle).is_some())
                .cloned();
        }

        let resolution = self.resolver.resolve(&reference);
        tracing::info!("Background set to {}", reference);
        self.reference = reference;
        self.controller.request(resolution.candidates)
    }

    pub fn on_loaded(&mut self, ticket: &LoadTicket) -> PlaybackOutcome {
        self.controller.on_loaded(ticket)
    }

    pub fn on_error(&mut self, ticket: &LoadTicket, failure: MediaFailure) -> PlaybackOutcome {
        self.controller.on_error(ticket, failure)
    }

    /// Probes candidates until the controller leaves `Loading`.
    ///
    /// Each probe is bounded by the configured load timeout; expiry counts
    /// as `MediaFailure::Timeout`.
    pub async fn settle(&mut self) -> PlaybackPhase {
        while let Some(ticket) = self.controller.current_ticket() {
            let result = match tokio::time::timeout(self.load_timeout, self.probe.probe(ticket.url()))
                .await
            {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        "Background source {} did not load within {:?}",
                        ticket.url(),
                        self.load_timeout
                    );
                    Err(MediaFailure::Timeout)
                }
            };

            let outcome = match result {
                Ok(()) => self.controller.on_loaded(&ticket),
                Err(failure) => self.controller.on_error(&ticket, failure),
            };
            if outcome == PlaybackOutcome::Exhausted {
                tracing::info!("No background source could be played, showing gradient");
            }
        }
        self.controller.phase()
    }

    /// Returns to `Idle` and releases any leased handle.
    pub fn teardown(&mut self) {
        self.controller.reset();
        self.release_lease();
    }

    fn release_lease(&mut self) {
        if let Some(handle) = self.lease.take() {
            self.resolver.local_media().release(&handle);
        }
    }
}

impl Drop for BackgroundSession {
    fn drop(&mut self) {
        self.release_lease();
    }
}
