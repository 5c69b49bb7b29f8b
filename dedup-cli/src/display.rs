//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use dedup_core::{BatchSummary, ClassifiedContact, MatchOutcome, MatchResult};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Displays the verdict of a single duplicate check.
pub fn display_match(result: &MatchResult<'_>) {
    match (result.outcome, result.matched_contact) {
        (MatchOutcome::Duplicate(signal), Some(matched)) => {
            warning(&format!(
                "Possible duplicate of {} ({:.1}% similar, same {:?})",
                style(matched.name()).bold(),
                result.score,
                signal
            ));
            if let Some(id) = matched.id() {
                println!("  ID: {}", style(id).dim());
            }
        }
        (MatchOutcome::Unconfirmed, _) => {
            info(&format!(
                "Similar contact found ({:.1}%), but neither name nor email matches",
                result.best_score
            ));
        }
        (MatchOutcome::NoCandidates, _) => {
            success("No existing contacts to compare against");
        }
        _ => {
            success(&format!(
                "No duplicate found (best match {:.1}%)",
                result.best_score
            ));
        }
    }
}

#[derive(Tabled)]
struct ClassifiedRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Similarity")]
    similarity: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl ClassifiedRow {
    fn new(index: usize, classified: &ClassifiedContact) -> Self {
        let contact = &classified.contact;
        let status = match (&classified.matched_id, classified.is_duplicate) {
            (Some(id), true) => format!("duplicate of {}", id),
            (None, true) => "duplicate".to_string(),
            (_, false) => "new".to_string(),
        };

        ClassifiedRow {
            index,
            name: contact.name().to_string(),
            email: contact.email().unwrap_or_default().to_string(),
            phone: contact.phone().unwrap_or_default().to_string(),
            similarity: format!("{:.1}%", classified.validation_percent),
            status,
        }
    }
}

/// Displays classified candidates as a table.
pub fn display_classified_table(results: &[ClassifiedContact]) {
    let rows: Vec<ClassifiedRow> = results
        .iter()
        .enumerate()
        .map(|(i, classified)| ClassifiedRow::new(i + 1, classified))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Displays the counts for a classified batch.
pub fn display_summary(summary: &BatchSummary) {
    println!(
        "  {} candidates: {} new, {} possible duplicates",
        summary.total,
        style(summary.unique).green(),
        style(summary.duplicates).yellow()
    );
}
