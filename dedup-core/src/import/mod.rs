// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Import
//!
//! Turns delimited rows (`name,email,phone,id_crm,tags`) into candidate
//! contacts. Each row is validated on its own; a bad row is reported with
//! its line number and never stops the rest of the file.

mod conflicts;
pub mod validation;

pub use conflicts::{find_id_crm_conflicts, IdCrmConflict};

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::contact::Contact;
use crate::error::{DedupResult, ImportError};
use validation::{parse_id_crm, validate_email, validate_length, validate_phone};

/// One imported row, as read from the file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub id_crm: Option<String>,
    /// Comma-separated labels
    pub tags: Option<String>,
}

impl ImportRecord {
    /// Validates the row and converts it into a candidate contact.
    ///
    /// Blank optional fields are treated as absent.
    pub fn into_contact(self) -> Result<Contact, ImportError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ImportError::MissingName);
        }
        validate_length(name)?;

        let mut contact = Contact::new(name);

        if let Some(email) = non_blank(&self.email) {
            validate_email(email)?;
            contact = contact.with_email(email);
        }
        if let Some(phone) = non_blank(&self.phone) {
            validate_phone(phone)?;
            contact = contact.with_phone(phone);
        }
        if let Some(id_crm) = non_blank(&self.id_crm) {
            contact = contact.with_id_crm(parse_id_crm(id_crm)?);
        }
        if let Some(tags) = non_blank(&self.tags) {
            validate_length(tags)?;
            contact = contact.with_tags(
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty()),
            );
        }

        Ok(contact)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Outcome of importing one data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    Valid { line: u64, contact: Contact },
    Invalid { line: u64, error: ImportError },
}

impl RowOutcome {
    /// Returns the 1-based line number of the row in the source file.
    pub fn line(&self) -> u64 {
        match self {
            RowOutcome::Valid { line, .. } | RowOutcome::Invalid { line, .. } => *line,
        }
    }

    /// Returns the contact if the row was valid.
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            RowOutcome::Valid { contact, .. } => Some(contact),
            RowOutcome::Invalid { .. } => None,
        }
    }
}

/// Reads a CSV file with a header row into per-row outcomes.
///
/// Columns are matched by header name and may appear in any order; missing
/// optional columns are fine. Only an unreadable header row fails the whole
/// import.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<RowOutcome>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header occupies line 1.
        let fallback_line = index as u64 + 2;

        let outcome = match record {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|pos| pos.line())
                    .unwrap_or(fallback_line);
                match record
                    .deserialize::<ImportRecord>(Some(&headers))
                    .map_err(ImportError::from)
                    .and_then(ImportRecord::into_contact)
                {
                    Ok(contact) => RowOutcome::Valid { line, contact },
                    Err(error) => RowOutcome::Invalid { line, error },
                }
            }
            Err(err) => RowOutcome::Invalid {
                line: err.position().map(|pos| pos.line()).unwrap_or(fallback_line),
                error: err.into(),
            },
        };

        if let RowOutcome::Invalid { line, error } = &outcome {
            tracing::debug!(line, %error, "skipping invalid import row");
        }
        rows.push(outcome);
    }

    Ok(rows)
}

/// Opens `path` and reads it with [`read_csv`].
pub fn read_csv_path(path: &Path) -> DedupResult<Vec<RowOutcome>> {
    let file = File::open(path)?;
    Ok(read_csv(file)?)
}
