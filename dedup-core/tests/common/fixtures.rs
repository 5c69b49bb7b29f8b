// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Fixtures

use dedup_core::Contact;

/// Builds a contact with the three fields that make up the composite key.
pub fn contact(name: &str, email: &str, phone: &str) -> Contact {
    Contact::new(name).with_email(email).with_phone(phone)
}

/// Builds a persisted contact.
pub fn persisted(id: &str, name: &str, email: &str, phone: &str) -> Contact {
    contact(name, email, phone).with_id(id)
}

/// A small CRM snapshot with clearly distinct people.
pub fn crm_snapshot() -> Vec<Contact> {
    vec![
        persisted("1", "John Doe", "john@x.com", "555-1111"),
        persisted("2", "Maria Garcia", "maria.garcia@acme.com", "555-0101"),
        persisted("3", "Robert Lee", "rob@x.com", "555-3333"),
        persisted("4", "Tobias Kline", "tk@zeta.net", "777-4444"),
    ]
}
