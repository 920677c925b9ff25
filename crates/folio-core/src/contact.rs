//! Contact form on the public site.
//!
//! Submission is acknowledged locally; no message is ever sent anywhere.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional.
    pub subject: String,
    pub message: String,
}

/// Shown to the visitor after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAcknowledgment {
    pub name: String,
    pub received_at: DateTime<Utc>,
}

impl ContactAcknowledgment {
    pub fn message(&self) -> String {
        format!(
            "Thanks {}! Your message has been received. I'll get back to you soon.",
            self.name
        )
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: String::new(),
            message: message.into(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Checks that name, email and message are non-empty and, on success,
    /// clears the whole form. The subject may be left empty.
    ///
    /// A rejected submission keeps what the visitor typed.
    pub fn submit(&mut self) -> Result<ContactAcknowledgment> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|value| value.is_empty())
        {
            return Err(FolioError::validation("Please fill in all required fields."));
        }

        let acknowledgment = ContactAcknowledgment {
            name: std::mem::take(&mut self.name),
            received_at: Utc::now(),
        };
        *self = Self::default();
        Ok(acknowledgment)
    }
}
