//! Media input handling: upload validation and source probing.

mod probe;
mod upload;

pub use probe::MediaProbe;
pub use upload::{ACCEPTED_MIME_PREFIX, MAX_UPLOAD_BYTES, UploadCandidate, validate_upload};
