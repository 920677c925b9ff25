use async_trait::async_trait;

use crate::background::MediaFailure;

/// Attempts to buffer a background source.
///
/// Implementations report whether the source could start playing. They do
/// not enforce a deadline; the caller bounds each probe with its own timeout.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    async fn probe(&self, url: &str) -> std::result::Result<(), MediaFailure>;
}
