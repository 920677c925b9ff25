use anyhow::Result;
use folio_application::PublicView;
use folio_core::background::{DisplayLayer, NoLocalMedia, PRESET_CATALOG, PlaybackPhase};
use folio_core::snapshot::SnapshotOrigin;
use std::sync::Arc;

use super::Environment;

pub async fn run(env: &Environment, json: bool) -> Result<()> {
    let mut view = PublicView::load(
        env.store.as_ref(),
        Arc::new(NoLocalMedia),
        env.probe.clone(),
        &env.config.playback,
    )
    .await;
    let phase = view.settle_background().await;

    if json {
        let output = serde_json::json!({
            "profile": view.profile(),
            "background": view.background().reference(),
            "layer": view.layer(),
            "layers": view.layer_stack(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let profile = view.profile();
    if let SnapshotOrigin::Recovered(e) = view.origin() {
        eprintln!("⚠️  Showing defaults: {}", e);
    }

    println!("{}", profile.name);
    println!("{}", profile.title);
    println!();
    println!("{}", profile.description);
    println!();
    println!("📧 {}", profile.email);
    println!("📞 {}", profile.phone);
    println!("📍 {}", profile.location);
    println!("Skills: {}", profile.skills.join(", "));
    println!();

    let background = view.background().reference().to_string();
    match view.layer() {
        DisplayLayer::Video(url) => println!("🎬 Background: {} ({})", background, url),
        DisplayLayer::Gradient if phase == PlaybackPhase::Errored => {
            println!("🌈 Background: gradient ({} could not be loaded)", background)
        }
        DisplayLayer::Gradient => println!("🌈 Background: gradient"),
    }

    Ok(())
}

pub fn presets() {
    for preset in PRESET_CATALOG.all() {
        let marker = if preset.is_default { " (default)" } else { "" };
        println!("{}{}", preset.id, marker);
        println!("    {}: {}", preset.display_name, preset.description);
        println!("    {}", preset.source_url);
    }
}
