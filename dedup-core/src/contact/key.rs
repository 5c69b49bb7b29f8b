// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Composite comparison key for a contact.

use super::Contact;

/// Builds the lower-cased `name email phone` key used for fuzzy comparison.
///
/// Missing fields contribute an empty string, so the separators are always
/// present: a contact with only a name yields `"alice  "`.
pub fn contact_key(contact: &Contact) -> String {
    format!(
        "{} {} {}",
        contact.name(),
        contact.email().unwrap_or_default(),
        contact.phone().unwrap_or_default()
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_joins_and_lowercases() {
        let contact = Contact::new("John Doe")
            .with_email("John@X.com")
            .with_phone("555-1111");
        assert_eq!(contact_key(&contact), "john doe john@x.com 555-1111");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        assert_eq!(contact_key(&Contact::new("Alice")), "alice  ");
        assert_eq!(contact_key(&Contact::default()), "  ");
    }

    #[test]
    fn test_tags_and_ids_do_not_affect_key() {
        let plain = Contact::new("Alice").with_email("a@b.com");
        let tagged = plain.clone().with_id("9").with_tags(["x"]).with_id_crm(3);
        assert_eq!(contact_key(&plain), contact_key(&tagged));
    }
}
