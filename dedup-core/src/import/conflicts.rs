// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! `id_crm` collisions between an import and the existing contacts.
//!
//! The system of record enforces uniqueness on insert; this lets callers
//! surface the collision before sending anything.

use std::collections::HashMap;

use crate::contact::Contact;

/// A candidate whose `id_crm` is already taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdCrmConflict {
    /// Used by an existing contact.
    Existing {
        index: usize,
        id_crm: u64,
        existing_id: Option<String>,
    },
    /// Used by an earlier candidate in the same import.
    Batch {
        index: usize,
        id_crm: u64,
        first_index: usize,
    },
}

impl IdCrmConflict {
    /// Index of the conflicting candidate.
    pub fn index(&self) -> usize {
        match self {
            IdCrmConflict::Existing { index, .. } | IdCrmConflict::Batch { index, .. } => *index,
        }
    }
}

/// Lists candidates whose `id_crm` is already in use, in candidate order.
pub fn find_id_crm_conflicts(candidates: &[Contact], existing: &[Contact]) -> Vec<IdCrmConflict> {
    let taken: HashMap<u64, &Contact> = existing
        .iter()
        .filter_map(|contact| contact.id_crm().map(|id_crm| (id_crm, contact)))
        .collect();

    let mut seen: HashMap<u64, usize> = HashMap::new();
    let mut conflicts = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let Some(id_crm) = candidate.id_crm() else {
            continue;
        };

        if let Some(owner) = taken.get(&id_crm) {
            // Re-validating a persisted contact against itself is not a clash.
            if !candidate.is_same_record(owner) {
                conflicts.push(IdCrmConflict::Existing {
                    index,
                    id_crm,
                    existing_id: owner.id().map(str::to_string),
                });
            }
            continue;
        }

        match seen.get(&id_crm) {
            Some(&first_index) => conflicts.push(IdCrmConflict::Batch {
                index,
                id_crm,
                first_index,
            }),
            None => {
                seen.insert(id_crm, index);
            }
        }
    }

    conflicts
}
