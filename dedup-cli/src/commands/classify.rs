//! Classify Command
//!
//! Classifies an import file against an existing snapshot.

use std::path::Path;

use anyhow::Result;
use dedup_core::{find_id_crm_conflicts, BatchSummary, ClassifiedContact, IdCrmConflict};
use serde::Serialize;

use crate::config::CliConfig;
use crate::display;
use crate::input::{self, ImportedCandidates};

/// Everything `classify` reports, in the shape printed by `--json`.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub summary: BatchSummary,
    pub contacts: Vec<ClassifiedContact>,
    pub rejected_rows: Vec<RejectedRow>,
    pub conflicts: Vec<ConflictRow>,
}

/// An import row that failed validation.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub error: String,
}

/// Where a clashing `id_crm` is already used.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ConflictWith {
    /// An existing contact, by id when it has one.
    Existing { existing_id: Option<String> },
    /// An earlier row of the same import.
    Import { first_line: u64 },
}

/// A candidate whose `id_crm` is already taken.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ConflictRow {
    pub line: u64,
    pub name: String,
    pub id_crm: u64,
    #[serde(flatten)]
    pub with: ConflictWith,
}

impl ConflictRow {
    fn new(conflict: IdCrmConflict, imported: &ImportedCandidates) -> Self {
        let index = conflict.index();
        let (id_crm, with) = match conflict {
            IdCrmConflict::Existing {
                id_crm,
                existing_id,
                ..
            } => (id_crm, ConflictWith::Existing { existing_id }),
            IdCrmConflict::Batch {
                id_crm,
                first_index,
                ..
            } => (
                id_crm,
                ConflictWith::Import {
                    first_line: imported.line_of(first_index),
                },
            ),
        };

        ConflictRow {
            line: imported.line_of(index),
            name: imported.contacts[index].name().to_string(),
            id_crm,
            with,
        }
    }

    fn message(&self) -> String {
        match &self.with {
            ConflictWith::Existing { existing_id } => format!(
                "Line {} ({}): id_crm {} already belongs to contact {}",
                self.line,
                self.name,
                self.id_crm,
                existing_id.as_deref().unwrap_or("(no id)")
            ),
            ConflictWith::Import { first_line } => format!(
                "Line {} ({}): id_crm {} repeats line {}",
                self.line, self.name, self.id_crm, first_line
            ),
        }
    }
}

/// Loads both files and classifies every valid candidate.
pub fn build_report(
    config: &CliConfig,
    existing_path: &Path,
    input_path: &Path,
) -> Result<ClassifyReport> {
    let existing = input::load_contacts_json(existing_path)?;
    let imported = input::load_candidates(input_path)?;
    let matcher = config.matcher()?;

    let contacts = matcher.classify_batch(&imported.contacts, &existing);
    let conflicts = find_id_crm_conflicts(&imported.contacts, &existing)
        .into_iter()
        .map(|conflict| ConflictRow::new(conflict, &imported))
        .collect();
    let rejected_rows = imported
        .rejected
        .iter()
        .map(|(line, error)| RejectedRow {
            line: *line,
            error: error.to_string(),
        })
        .collect();

    Ok(ClassifyReport {
        summary: BatchSummary::from_results(&contacts),
        contacts,
        rejected_rows,
        conflicts,
    })
}

/// Runs batch classification and prints a table or JSON report.
pub fn run(config: &CliConfig, existing_path: &Path, input_path: &Path) -> Result<()> {
    let report = build_report(config, existing_path, input_path)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for row in &report.rejected_rows {
        display::warning(&format!("Skipped line {}: {}", row.line, row.error));
    }
    for conflict in &report.conflicts {
        display::warning(&conflict.message());
    }

    if report.contacts.is_empty() {
        display::info("No valid candidates to classify");
        return Ok(());
    }

    println!();
    display::display_classified_table(&report.contacts);
    println!();
    display::display_summary(&report.summary);
    println!();

    Ok(())
}
