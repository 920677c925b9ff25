use async_trait::async_trait;
use folio_application::{BackgroundSession, EditingSession, NoticeLevel, PublicView};
use folio_core::background::{
    BackgroundReference, MediaFailure, NoLocalMedia, PlaybackOutcome, PlaybackPhase,
};
use folio_core::config::PlaybackSettings;
use folio_core::media::{MediaProbe, UploadCandidate};
use folio_core::profile::ProfileField;
use folio_core::snapshot::{PersistedSnapshot, ProfileStore};
use folio_infrastructure::{KeyValueProfileStore, LocalMediaRegistry, MemoryKeyValueStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Every source plays.
struct Plays;

#[async_trait]
impl MediaProbe for Plays {
    async fn probe(&self, _url: &str) -> Result<(), MediaFailure> {
        Ok(())
    }
}

/// Never answers; only a timeout ends the attempt.
struct Hangs {
    calls: AtomicUsize,
}

#[async_trait]
impl MediaProbe for Hangs {
    async fn probe(&self, _url: &str) -> Result<(), MediaFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(())
    }
}

fn settings() -> PlaybackSettings {
    PlaybackSettings::default()
}

#[tokio::test]
async fn test_edits_are_visible_to_a_later_public_view() {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn ProfileStore> =
        Arc::new(KeyValueProfileStore::in_dir(temp_dir.path().to_path_buf()));

    let mut editor = EditingSession::open(
        store.clone(),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;
    editor.set_field(ProfileField::Name, "Maya");
    editor.add_skill("Rust");
    editor.select_preset("geometric-shapes").unwrap();
    editor.save().await.unwrap();
    editor.close();

    let mut view = PublicView::load(
        store.as_ref(),
        Arc::new(NoLocalMedia),
        Arc::new(Plays),
        &settings(),
    )
    .await;
    assert_eq!(view.profile().name, "Maya");
    assert_eq!(view.profile().skills.last().map(String::as_str), Some("Rust"));
    assert_eq!(
        view.background().reference(),
        &BackgroundReference::preset("geometric-shapes")
    );
    assert_eq!(view.settle_background().await, PlaybackPhase::Loaded);
}

#[tokio::test]
async fn test_stale_signals_are_ignored() {
    let mut session = BackgroundSession::new(Arc::new(NoLocalMedia), Arc::new(Plays), &settings());

    let first = session
        .select(BackgroundReference::external("https://a.example/1.mp4"))
        .unwrap();
    let second = session
        .select(BackgroundReference::external("https://b.example/2.mp4"))
        .unwrap();

    assert_eq!(session.on_loaded(&first), PlaybackOutcome::Ignored);
    assert_eq!(session.phase(), PlaybackPhase::Loading);
    assert_eq!(
        session.controller().state().active_source_url.as_deref(),
        Some("https://b.example/2.mp4")
    );

    assert_eq!(
        session.on_error(&second, MediaFailure::NotFound),
        PlaybackOutcome::Exhausted
    );
    assert_eq!(session.on_loaded(&second), PlaybackOutcome::Ignored);
    assert_eq!(session.phase(), PlaybackPhase::Errored);
    assert!(session.layer_stack().gradient_visible);
}

#[tokio::test]
async fn test_oversized_upload_keeps_current_background() {
    let mut editor = EditingSession::open(
        Arc::new(KeyValueProfileStore::in_memory()),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;
    editor.select_external_url("https://example.com/reel.mp4");

    let candidate = UploadCandidate {
        file_name: "huge.mp4".to_string(),
        mime_type: "video/mp4".to_string(),
        size: 60 * 1024 * 1024,
    };
    let err = editor.upload_candidate(&candidate, "blob:huge").unwrap_err();
    assert!(err.is_upload_rejection());
    assert_eq!(
        editor.background(),
        &BackgroundReference::external("https://example.com/reel.mp4")
    );

    let notices = editor.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].title, "File Too Large");
}

#[tokio::test]
async fn test_non_video_upload_keeps_current_background() {
    let mut editor = EditingSession::open(
        Arc::new(KeyValueProfileStore::in_memory()),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;
    let before = editor.background().clone();

    let candidate = UploadCandidate {
        file_name: "cv.pdf".to_string(),
        mime_type: "document/pdf".to_string(),
        size: 2048,
    };
    let err = editor.upload_candidate(&candidate, "blob:cv").unwrap_err();
    assert!(matches!(err, folio_core::FolioError::InvalidFileType { .. }));
    assert_eq!(editor.background(), &before);
    assert_eq!(editor.notices()[0].title, "Invalid File");
}

#[tokio::test]
async fn test_save_with_storage_unavailable() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let store = Arc::new(KeyValueProfileStore::new(backend.clone(), "portfolioData"));
    let mut editor = EditingSession::open(
        store.clone(),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;

    editor.set_field(ProfileField::Title, "Filmmaker");
    backend.set_available(false);

    let err = editor.save().await.unwrap_err();
    assert!(err.is_storage_unavailable());
    assert_eq!(editor.profile().title, "Filmmaker");
    assert!(editor.notices().last().unwrap().is_error());

    backend.set_available(true);
    assert!(store.load().await.unwrap().is_none());
    editor.save().await.unwrap();
    assert_eq!(store.load().await.unwrap().unwrap().profile.title, "Filmmaker");
}

#[tokio::test]
async fn test_open_with_storage_unavailable_shows_notice() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    backend.set_available(false);
    let editor = EditingSession::open(
        Arc::new(KeyValueProfileStore::new(backend, "portfolioData")),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;

    assert_eq!(editor.snapshot(), PersistedSnapshot::default());
    assert_eq!(editor.notices()[0].title, "Storage Unavailable");
}

#[tokio::test(start_paused = true)]
async fn test_hanging_source_times_out_to_gradient() {
    let probe = Arc::new(Hangs {
        calls: AtomicUsize::new(0),
    });
    let mut session = BackgroundSession::new(Arc::new(NoLocalMedia), probe.clone(), &settings());
    session.select(BackgroundReference::default_preset());

    assert_eq!(session.settle().await, PlaybackPhase::Errored);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
    assert!(session.layer_stack().gradient_visible);

    // The failed source is not retried for the same reference.
    session.select(BackgroundReference::default_preset());
    assert_eq!(session.settle().await, PlaybackPhase::Errored);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_uploaded_video_does_not_outlive_its_session() {
    let temp_dir = TempDir::new().unwrap();
    let video = temp_dir.path().join("intro.webm");
    std::fs::write(&video, b"webm").unwrap();
    let store: Arc<dyn ProfileStore> =
        Arc::new(KeyValueProfileStore::in_dir(temp_dir.path().join("store")));

    let registry = Arc::new(LocalMediaRegistry::new());
    let mut editor =
        EditingSession::open(store.clone(), registry.clone(), Arc::new(Plays), &settings()).await;
    editor.upload_local_file(&video).unwrap();
    assert_eq!(registry.active_count(), 1);
    assert_eq!(editor.settle_background().await, PlaybackPhase::Loaded);
    editor.save().await.unwrap();
    editor.close();
    assert_eq!(registry.active_count(), 0);

    let mut view = PublicView::load(
        store.as_ref(),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;
    assert!(view.background().reference().local_handle().is_some());
    assert_eq!(view.settle_background().await, PlaybackPhase::Idle);
    assert!(view.layer_stack().video.is_none());
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let store = Arc::new(KeyValueProfileStore::in_memory());
    let mut editor = EditingSession::open(
        store.clone(),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;
    editor.remove_skill("Design");
    editor.use_gradient();
    editor.save().await.unwrap();

    editor.reset().await.unwrap();
    assert_eq!(editor.snapshot(), PersistedSnapshot::default());
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_non_utf8_snapshot_opens_on_defaults_without_storage_notice() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("portfolioData.json"),
        [0xFF, 0xFE, b'{'],
    )
    .unwrap();

    let editor = EditingSession::open(
        Arc::new(KeyValueProfileStore::in_dir(temp_dir.path().to_path_buf())),
        Arc::new(LocalMediaRegistry::new()),
        Arc::new(Plays),
        &settings(),
    )
    .await;

    assert_eq!(editor.snapshot(), PersistedSnapshot::default());
    assert!(
        editor
            .notices()
            .iter()
            .all(|notice| notice.title != "Storage Unavailable")
    );
}
