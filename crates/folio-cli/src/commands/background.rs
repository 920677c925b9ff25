use anyhow::Result;
use folio_core::background::PlaybackPhase;
use std::path::PathBuf;

use super::{Environment, print_notices, save_and_close};

pub enum Choice {
    Gradient,
    Preset(String),
    Url(String),
    File(PathBuf),
}

pub async fn run(env: &Environment, choice: Choice) -> Result<()> {
    let mut editor = env.open_editor().await;

    match choice {
        Choice::Gradient => editor.use_gradient(),
        Choice::Preset(id) => {
            if let Err(e) = editor.select_preset(&id) {
                editor.close();
                return Err(anyhow::anyhow!("{} (see `folio presets`)", e));
            }
        }
        Choice::Url(url) => editor.select_external_url(&url),
        Choice::File(path) => {
            if let Err(e) = editor.upload_local_file(&path) {
                print_notices(&editor.take_notices());
                editor.close();
                return Err(e.into());
            }
            println!("ℹ️  Local videos play only while this session runs; visitors will see the gradient.");
        }
    }

    match editor.settle_background().await {
        PlaybackPhase::Loaded => println!("🎬 Background video is playable"),
        PlaybackPhase::Errored => {
            println!("⚠️  Background video could not be loaded; the gradient will show")
        }
        PlaybackPhase::Idle | PlaybackPhase::Loading => println!("🌈 Showing the animated gradient"),
    }

    save_and_close(editor).await
}
