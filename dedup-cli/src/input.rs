//! Input Files
//!
//! Loads the existing-contact snapshot (JSON) and import candidates
//! (CSV or JSON) from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dedup_core::{read_csv_path, Contact, ImportError, RowOutcome};
use tracing::debug;

/// Candidates read from an import file.
#[derive(Debug, Default)]
pub struct ImportedCandidates {
    pub contacts: Vec<Contact>,
    /// Source line of each contact; the 1-based array position for JSON.
    pub lines: Vec<u64>,
    /// Rows that failed validation, with their line numbers.
    pub rejected: Vec<(u64, ImportError)>,
}

impl ImportedCandidates {
    /// Returns the source line of the contact at `index`.
    pub fn line_of(&self, index: usize) -> u64 {
        self.lines
            .get(index)
            .copied()
            .unwrap_or(index as u64 + 1)
    }
}

/// Reads a JSON array of contacts.
pub fn load_contacts_json(path: &Path) -> Result<Vec<Contact>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let contacts: Vec<Contact> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of contacts", path.display()))?;
    debug!(path = %path.display(), count = contacts.len(), "loaded contacts");
    Ok(contacts)
}

/// Reads candidates from a `.json` file or, for any other extension, a CSV
/// file with a header row.
pub fn load_candidates(path: &Path) -> Result<ImportedCandidates> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let contacts = load_contacts_json(path)?;
        return Ok(ImportedCandidates {
            lines: (1..=contacts.len() as u64).collect(),
            contacts,
            rejected: Vec::new(),
        });
    }

    let rows = read_csv_path(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut imported = ImportedCandidates::default();
    for row in rows {
        match row {
            RowOutcome::Valid { line, contact } => {
                imported.contacts.push(contact);
                imported.lines.push(line);
            }
            RowOutcome::Invalid { line, error } => imported.rejected.push((line, error)),
        }
    }
    debug!(
        path = %path.display(),
        valid = imported.contacts.len(),
        rejected = imported.rejected.len(),
        "loaded candidates"
    );
    Ok(imported)
}
