//! Editable profile model.

use super::model::{ProfileField, ProfileRecord};

/// In-memory editable representation of the profile.
///
/// One instance is owned by each running editing surface. All operations are
/// synchronous and only touch the wrapped record; persisting it is the
/// caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileModel {
    record: ProfileRecord,
}

impl ProfileModel {
    pub fn new(record: ProfileRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Replaces a text field verbatim.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> &ProfileRecord {
        *self.record.field_mut(field) = value.into();
        &self.record
    }

    /// Appends a skill after trimming it.
    ///
    /// Empty names and exact (case-sensitive) duplicates leave the record unchanged.
    pub fn add_skill(&mut self, name: &str) -> &ProfileRecord {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return &self.record;
        }
        if self.record.skills.iter().any(|skill| skill == trimmed) {
            tracing::debug!(skill = trimmed, "Skill already present, ignoring");
            return &self.record;
        }
        self.record.skills.push(trimmed.to_string());
        &self.record
    }

    /// Removes the first exact match; an absent name is a no-op.
    pub fn remove_skill(&mut self, name: &str) -> &ProfileRecord {
        if let Some(index) = self.record.skills.iter().position(|skill| skill == name) {
            self.record.skills.remove(index);
        }
        &self.record
    }
}

impl From<ProfileRecord> for ProfileModel {
    fn from(record: ProfileRecord) -> Self {
        Self::new(record)
    }
}
