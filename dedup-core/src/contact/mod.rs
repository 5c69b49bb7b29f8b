//! Contact Module
//!
//! CRM contacts as handed to the matcher by the system of record. The
//! matcher only ever reads them.

mod key;

pub use key::contact_key;

use serde::{Deserialize, Serialize};

/// A CRM contact.
///
/// Persisted contacts carry an `id`; candidates that have not been created
/// yet usually don't.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Opaque identifier assigned by the system of record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Display name (may be empty)
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    /// Short labels, in the order they were given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    /// Externally assigned numeric identifier, unique among persisted contacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_crm: Option<u64>,
    /// Unix timestamp (seconds) of the most recent interaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_activity: Option<u64>,
}

impl Contact {
    /// Creates a contact with only a name set.
    pub fn new(name: &str) -> Self {
        Contact {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the external CRM identifier.
    pub fn with_id_crm(mut self, id_crm: u64) -> Self {
        self.id_crm = Some(id_crm);
        self
    }

    /// Sets the last activity timestamp (Unix seconds).
    pub fn with_last_activity(mut self, timestamp: u64) -> Self {
        self.last_activity = Some(timestamp);
        self
    }

    /// Returns the contact's identifier, if persisted.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the external CRM identifier.
    pub fn id_crm(&self) -> Option<u64> {
        self.id_crm
    }

    /// Returns the last activity timestamp (Unix seconds).
    pub fn last_activity(&self) -> Option<u64> {
        self.last_activity
    }

    /// Returns true if both contacts carry the same identifier.
    ///
    /// Contacts without an identifier are never the same record.
    pub fn is_same_record(&self, other: &Contact) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}
