//! Portfolio snapshot DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use folio_core::background::BackgroundReference;
use folio_core::profile::ProfileRecord;
use folio_core::snapshot::PersistedSnapshot;

/// Entity name the snapshot migration path is registered under.
pub const SNAPSHOT_ENTITY: &str = "portfolio_snapshot";

/// Version assumed for stored values that carry no `version` key.
const LEGACY_VERSION: &str = "1.0.0";

/// Stored profile fields, in the site's camelCase wire names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoDTO {
    pub name: String,
    pub title: String,
    pub description: String,
    pub profile_image: String,
    pub about_image: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub whatsapp_url: String,
    pub linkedin_url: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl From<PersonalInfoDTO> for ProfileRecord {
    fn from(dto: PersonalInfoDTO) -> Self {
        ProfileRecord {
            name: dto.name,
            title: dto.title,
            description: dto.description,
            profile_image: dto.profile_image,
            about_image: dto.about_image,
            email: dto.email,
            phone: dto.phone,
            location: dto.location,
            instagram_url: dto.instagram_url,
            facebook_url: dto.facebook_url,
            whatsapp_url: dto.whatsapp_url,
            linkedin_url: dto.linkedin_url,
            skills: dto.skills,
        }
    }
}

impl From<ProfileRecord> for PersonalInfoDTO {
    fn from(record: ProfileRecord) -> Self {
        PersonalInfoDTO {
            name: record.name,
            title: record.title,
            description: record.description,
            profile_image: record.profile_image,
            about_image: record.about_image,
            email: record.email,
            phone: record.phone,
            location: record.location,
            instagram_url: record.instagram_url,
            facebook_url: record.facebook_url,
            whatsapp_url: record.whatsapp_url,
            linkedin_url: record.linkedin_url,
            skills: record.skills,
        }
    }
}

/// Snapshot V1.0.0: the profile plus a bare background video URL.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshotV1_0 {
    pub personal_info: PersonalInfoDTO,
    /// Empty string means the gradient.
    #[serde(default)]
    pub custom_video_url: String,
}

/// Snapshot V1.1.0 (added structured background reference).
///
/// `custom_video_url` is still written so readers of the 1.0.0 shape keep
/// showing the right video.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshotV1_1 {
    pub personal_info: PersonalInfoDTO,
    #[serde(default)]
    pub custom_video_url: String,
    pub background: BackgroundReference,
}

/// Type alias for the latest snapshot version.
pub type PortfolioSnapshotDTO = PortfolioSnapshotV1_1;

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from V1.0 to V1.1: classify the stored URL.
impl MigratesTo<PortfolioSnapshotV1_1> for PortfolioSnapshotV1_0 {
    fn migrate(self) -> PortfolioSnapshotV1_1 {
        let background = BackgroundReference::from_video_url(&self.custom_video_url);
        PortfolioSnapshotV1_1 {
            personal_info: self.personal_info,
            custom_video_url: self.custom_video_url,
            background,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<PersistedSnapshot> for PortfolioSnapshotV1_1 {
    fn into_domain(self) -> PersistedSnapshot {
        PersistedSnapshot::new(self.personal_info.into(), self.background)
    }
}

impl FromDomain<PersistedSnapshot> for PortfolioSnapshotV1_1 {
    fn from_domain(snapshot: PersistedSnapshot) -> Self {
        PortfolioSnapshotV1_1 {
            custom_video_url: snapshot.background.persistent_url().unwrap_or_default(),
            personal_info: snapshot.profile.into(),
            background: snapshot.background,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for portfolio snapshots.
///
/// # Migration Path
///
/// - V1.0 → V1.1: Derives `background` from `customVideoUrl`
/// - V1.1 → PersistedSnapshot: Converts DTO to domain model
pub fn create_snapshot_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let path = version_migrate::Migrator::define(SNAPSHOT_ENTITY)
        .from::<PortfolioSnapshotV1_0>()
        .step::<PortfolioSnapshotV1_1>()
        .into_with_save::<PersistedSnapshot>();

    migrator
        .register(path)
        .expect("Failed to register portfolio_snapshot migration path");

    migrator
}

/// Stamps values written before versioning with the 1.0.0 version key.
///
/// Non-object values are returned untouched and fail later as corrupt.
pub fn with_legacy_version(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(object) = value.as_object_mut() {
        if !object.contains_key("version") {
            object.insert(
                "version".to_string(),
                serde_json::Value::String(LEGACY_VERSION.to_string()),
            );
        }
    }
    value
}
