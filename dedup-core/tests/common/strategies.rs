// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use dedup_core::Contact;
use proptest::prelude::*;

/// Strategy for generating display names (non-empty, reasonable length).
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ]{0,24}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Strategy for generating email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Strategy for generating phone numbers.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{3}-[0-9]{4}"
}

/// Strategy for generating contacts without an id.
pub fn candidate_strategy() -> impl Strategy<Value = Contact> {
    (
        name_strategy(),
        proptest::option::of(email_strategy()),
        proptest::option::of(phone_strategy()),
    )
        .prop_map(|(name, email, phone)| {
            let mut contact = Contact::new(&name);
            if let Some(email) = email {
                contact = contact.with_email(&email);
            }
            if let Some(phone) = phone {
                contact = contact.with_phone(&phone);
            }
            contact
        })
}

/// Strategy for generating a persisted snapshot with unique ids `c0..cN`.
pub fn existing_strategy(max: usize) -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(candidate_strategy(), 0..max).prop_map(|contacts| {
        contacts
            .into_iter()
            .enumerate()
            .map(|(i, contact)| contact.with_id(&format!("c{}", i)))
            .collect()
    })
}

/// Strategy for a persisted snapshot where every name starts with the same
/// long first name, e.g. `christopher smith`, `christopher jones`.
pub fn shared_first_name_strategy(max: usize) -> impl Strategy<Value = Vec<Contact>> {
    let rest = (
        "[a-z]{2,12}",
        proptest::option::of(email_strategy()),
        proptest::option::of(phone_strategy()),
    );
    ("[a-z]{10,14}", prop::collection::vec(rest, 1..max)).prop_map(|(first, rest)| {
        rest.into_iter()
            .enumerate()
            .map(|(i, (last, email, phone))| {
                let mut contact = Contact::new(&format!("{} {}", first, last));
                if let Some(email) = email {
                    contact = contact.with_email(&email);
                }
                if let Some(phone) = phone {
                    contact = contact.with_phone(&phone);
                }
                contact.with_id(&format!("c{}", i))
            })
            .collect()
    })
}
