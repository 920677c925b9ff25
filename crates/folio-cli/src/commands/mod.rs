pub mod background;
pub mod contact;
pub mod edit;
pub mod show;

use anyhow::{Context, Result};
use folio_application::{EditingSession, Notice, NoticeLevel};
use folio_core::config::FolioConfig;
use folio_core::media::MediaProbe;
use folio_core::snapshot::ProfileStore;
use folio_infrastructure::{ConfigService, HttpMediaProbe, KeyValueProfileStore, LocalMediaRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything a command needs: resolved config, the store and a probe.
pub struct Environment {
    pub config: FolioConfig,
    pub store: Arc<dyn ProfileStore>,
    pub probe: Arc<dyn MediaProbe>,
}

impl Environment {
    pub fn load(config_path: Option<&Path>, store_dir: Option<PathBuf>) -> Result<Self> {
        let service = match config_path {
            Some(path) => ConfigService::with_path(path.to_path_buf()),
            None => ConfigService::new(),
        };
        let mut config = service
            .get_config()
            .context("Failed to load configuration")?;
        if let Some(dir) = store_dir {
            config.storage.dir = Some(dir);
        }

        let backend = ConfigService::store_backend(&config)
            .context("Failed to resolve the store directory")?;
        let store = KeyValueProfileStore::new(Arc::new(backend), config.storage.key.clone());

        Ok(Self {
            config,
            store: Arc::new(store),
            probe: Arc::new(HttpMediaProbe::new()),
        })
    }

    pub async fn open_editor(&self) -> EditingSession {
        EditingSession::open(
            self.store.clone(),
            Arc::new(LocalMediaRegistry::new()),
            self.probe.clone(),
            &self.config.playback,
        )
        .await
    }
}

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Success => println!("✅ {} {}", notice.title, notice.description),
            NoticeLevel::Error => eprintln!("❌ {} {}", notice.title, notice.description),
        }
    }
}

/// Saves, prints what happened and closes the session.
pub async fn save_and_close(mut editor: EditingSession) -> Result<()> {
    let saved = editor.save().await;
    print_notices(&editor.take_notices());
    editor.close();
    saved.context("Changes were not saved")?;
    Ok(())
}
