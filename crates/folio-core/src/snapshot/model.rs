use serde::{Deserialize, Serialize};

use crate::background::BackgroundReference;
use crate::profile::ProfileRecord;

/// Everything the store holds, replaced wholesale on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    pub profile: ProfileRecord,
    pub background: BackgroundReference,
}

impl PersistedSnapshot {
    pub fn new(profile: ProfileRecord, background: BackgroundReference) -> Self {
        Self {
            profile,
            background,
        }
    }
}

/// Built-in defaults: the default profile over the default preset video.
impl Default for PersistedSnapshot {
    fn default() -> Self {
        Self {
            profile: ProfileRecord::default(),
            background: BackgroundReference::default_preset(),
        }
    }
}
