//! ProfileRecord domain model.
//!
//! Represents everything the public site displays about its owner: identity,
//! images, contact details, social links and skills.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{FolioError, Result};

/// The editable profile shown on the public site.
///
/// Serialized in camelCase with the field names the site has always used
/// (`profileImage`, `instagramUrl`, ...), so stored snapshots stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Hero portrait (URL)
    pub profile_image: String,
    /// Image for the about section (URL)
    pub about_image: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub whatsapp_url: String,
    pub linkedin_url: String,
    /// Ordered, duplicate-free skill list.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            title: "Creative Designer & Digital Storyteller".to_string(),
            description: "Passionate about creating beautiful digital experiences and connecting with amazing people around the world. Let's build something extraordinary together!".to_string(),
            profile_image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400".to_string(),
            about_image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400".to_string(),
            email: "hello@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            instagram_url: "https://instagram.com".to_string(),
            facebook_url: "https://facebook.com".to_string(),
            whatsapp_url: "https://wa.me/".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),
            skills: vec![
                "Design".to_string(),
                "Photography".to_string(),
                "Storytelling".to_string(),
                "Social Media".to_string(),
                "Content Creation".to_string(),
            ],
        }
    }
}

impl ProfileRecord {
    /// Returns the current value of a text field.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Description => &self.description,
            ProfileField::ProfileImage => &self.profile_image,
            ProfileField::AboutImage => &self.about_image,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::InstagramUrl => &self.instagram_url,
            ProfileField::FacebookUrl => &self.facebook_url,
            ProfileField::WhatsappUrl => &self.whatsapp_url,
            ProfileField::LinkedinUrl => &self.linkedin_url,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Title => &mut self.title,
            ProfileField::Description => &mut self.description,
            ProfileField::ProfileImage => &mut self.profile_image,
            ProfileField::AboutImage => &mut self.about_image,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::InstagramUrl => &mut self.instagram_url,
            ProfileField::FacebookUrl => &mut self.facebook_url,
            ProfileField::WhatsappUrl => &mut self.whatsapp_url,
            ProfileField::LinkedinUrl => &mut self.linkedin_url,
        }
    }

    /// Checks the only constraint the editing surface enforces before saving:
    /// both image references must be non-empty.
    pub fn validate_for_save(&self) -> Result<()> {
        for field in [ProfileField::ProfileImage, ProfileField::AboutImage] {
            if self.field(field).trim().is_empty() {
                return Err(FolioError::validation(format!(
                    "'{}' must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// The text fields of a [`ProfileRecord`], addressable by their camelCase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    Name,
    Title,
    Description,
    ProfileImage,
    AboutImage,
    Email,
    Phone,
    Location,
    InstagramUrl,
    FacebookUrl,
    WhatsappUrl,
    LinkedinUrl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_profile() {
        let profile = ProfileRecord::default();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.skills.len(), 5);
        assert!(profile.validate_for_save().is_ok());
    }

    #[test]
    fn test_field_names_parse_in_camel_case() {
        assert_eq!(
            ProfileField::from_str("instagramUrl").unwrap(),
            ProfileField::InstagramUrl
        );
        assert_eq!(ProfileField::ProfileImage.to_string(), "profileImage");
        assert!(ProfileField::from_str("favouriteColour").is_err());
    }

    #[test]
    fn test_serialized_keys_match_field_names() {
        let value = serde_json::to_value(ProfileRecord::default()).unwrap();
        for field in ProfileField::iter() {
            assert!(
                value.get(field.to_string()).is_some(),
                "missing key {}",
                field
            );
        }
        assert!(value.get("skills").is_some());
    }

    #[test]
    fn test_validate_for_save_rejects_blank_images() {
        let mut profile = ProfileRecord::default();
        profile.about_image = "   ".to_string();
        let err = profile.validate_for_save().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("aboutImage"));
    }

    #[test]
    fn test_social_urls_are_not_validated() {
        let mut profile = ProfileRecord::default();
        profile.facebook_url = "not a url at all".to_string();
        assert!(profile.validate_for_save().is_ok());
    }
}
