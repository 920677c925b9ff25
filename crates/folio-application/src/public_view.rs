//! Public view: what visitors see.
//!
//! Reads the store once at load and never writes. Storage problems of any
//! kind degrade to the built-in defaults, so the view always renders.

use folio_core::background::{DisplayLayer, LayerStack, LocalMediaSource, PlaybackPhase};
use folio_core::config::PlaybackSettings;
use folio_core::contact::{ContactAcknowledgment, ContactForm};
use folio_core::error::Result;
use folio_core::media::MediaProbe;
use folio_core::profile::ProfileRecord;
use folio_core::snapshot::{ProfileStore, SnapshotOrigin, load_or_default};
use std::sync::Arc;

use crate::background_session::BackgroundSession;

pub struct PublicView {
    profile: ProfileRecord,
    origin: SnapshotOrigin,
    background: BackgroundSession,
    contact: ContactForm,
}

impl PublicView {
    pub async fn load(
        store: &dyn ProfileStore,
        local_media: Arc<dyn LocalMediaSource>,
        probe: Arc<dyn MediaProbe>,
        settings: &PlaybackSettings,
    ) -> Self {
        let startup = load_or_default(store).await;
        tracing::info!("Public view loaded ({:?})", startup.origin);

        let mut background = BackgroundSession::new(local_media, probe, settings);
        background.select(startup.snapshot.background);

        Self {
            profile: startup.snapshot.profile,
            origin: startup.origin,
            background,
            contact: ContactForm::default(),
        }
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Whether the profile came from the store or from defaults.
    pub fn origin(&self) -> &SnapshotOrigin {
        &self.origin
    }

    pub fn background(&self) -> &BackgroundSession {
        &self.background
    }

    /// The layer a renderer shows on top right now.
    pub fn layer(&self) -> DisplayLayer {
        self.background.controller().layer()
    }

    pub fn layer_stack(&self) -> LayerStack {
        self.background.layer_stack()
    }

    /// Drives the background probe until it leaves `Loading`.
    pub async fn settle_background(&mut self) -> PlaybackPhase {
        self.background.settle().await
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn submit_contact(&mut self) -> Result<ContactAcknowledgment> {
        let acknowledgment = self.contact.submit()?;
        tracing::info!("Contact message received from {}", acknowledgment.name);
        Ok(acknowledgment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::background::{MediaFailure, NoLocalMedia};
    use folio_infrastructure::KeyValueProfileStore;

    struct Unreachable;

    #[async_trait]
    impl MediaProbe for Unreachable {
        async fn probe(&self, _url: &str) -> std::result::Result<(), MediaFailure> {
            Err(MediaFailure::Network)
        }
    }

    #[tokio::test]
    async fn test_unreachable_video_shows_gradient() {
        let store = KeyValueProfileStore::in_memory();
        let mut view = PublicView::load(
            &store,
            Arc::new(NoLocalMedia),
            Arc::new(Unreachable),
            &PlaybackSettings::default(),
        )
        .await;

        assert_eq!(view.origin(), &SnapshotOrigin::Defaults);
        assert_eq!(view.profile().name, "Alex");
        assert_eq!(view.settle_background().await, PlaybackPhase::Errored);
        assert_eq!(view.layer(), DisplayLayer::Gradient);

        let stack = view.layer_stack();
        assert!(stack.gradient_visible);
        assert!(!stack.video.unwrap().visible);
    }

    #[tokio::test]
    async fn test_contact_form_keeps_input_on_rejection() {
        let store = KeyValueProfileStore::in_memory();
        let mut view = PublicView::load(
            &store,
            Arc::new(NoLocalMedia),
            Arc::new(Unreachable),
            &PlaybackSettings::default(),
        )
        .await;

        *view.contact_form_mut() = ContactForm::new("Sam", "sam@example.com", "");
        assert!(view.submit_contact().unwrap_err().is_validation());
        assert_eq!(view.contact_form().name, "Sam");

        view.contact_form_mut().message = "Hello!".to_string();
        let ack = view.submit_contact().unwrap();
        assert_eq!(ack.name, "Sam");
        assert!(view.contact_form().is_empty());
    }
}
