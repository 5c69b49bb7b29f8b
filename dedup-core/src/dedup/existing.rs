// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Precomputed comparison keys for a snapshot of existing contacts.

use crate::contact::{contact_key, Contact};

/// Existing contacts paired with their composite keys.
///
/// Keys are computed once when the set is built and reused for every
/// candidate checked against it. Order follows the input slice, which is
/// what tie-breaking relies on.
#[derive(Debug, Clone)]
pub struct ExistingSet<'a> {
    entries: Vec<(&'a Contact, String)>,
}

impl<'a> ExistingSet<'a> {
    /// Builds the set, computing one key per contact.
    pub fn new(existing: &'a [Contact]) -> Self {
        let entries = existing
            .iter()
            .map(|contact| (contact, contact_key(contact)))
            .collect();
        ExistingSet { entries }
    }

    /// Returns the number of contacts in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates contacts with their keys in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Contact, &str)> + '_ {
        self.entries
            .iter()
            .map(|(contact, key)| (*contact, key.as_str()))
    }
}
