use anyhow::Result;
use folio_application::PublicView;
use folio_core::background::NoLocalMedia;
use folio_core::contact::ContactForm;
use std::sync::Arc;

use super::Environment;

pub async fn run(
    env: &Environment,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
) -> Result<()> {
    let mut view = PublicView::load(
        env.store.as_ref(),
        Arc::new(NoLocalMedia),
        env.probe.clone(),
        &env.config.playback,
    )
    .await;

    *view.contact_form_mut() =
        ContactForm::new(name, email, message).with_subject(subject.unwrap_or_default());
    match view.submit_contact() {
        Ok(ack) => {
            println!("✅ Message Sent! {}", ack.message());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Error {}", e);
            Err(e.into())
        }
    }
}
