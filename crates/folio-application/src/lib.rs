//! Application layer for folio.
//!
//! The two surfaces of the site: the owner's editing session and the public
//! view. Both drive the background through a [`BackgroundSession`].

pub mod background_session;
pub mod editing;
pub mod public_view;

pub use background_session::BackgroundSession;
pub use editing::{EditingSession, Notice, NoticeLevel};
pub use public_view::PublicView;
