//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the stored portfolio
//! snapshot. They are private to the infrastructure layer and handle the
//! evolution of the storage format over time.
//!
//! ### PortfolioSnapshot Version History
//! - **1.0.0**: `{ personalInfo, customVideoUrl }`, written without a `version` key
//! - **1.1.0**: Added the structured `background` reference

mod snapshot;

pub use snapshot::{
    PersonalInfoDTO, PortfolioSnapshotDTO, PortfolioSnapshotV1_0, PortfolioSnapshotV1_1,
    SNAPSHOT_ENTITY, create_snapshot_migrator, with_legacy_version,
};
