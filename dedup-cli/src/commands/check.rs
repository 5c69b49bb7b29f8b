//! Check Command
//!
//! Checks a single contact against an existing snapshot.

use std::path::Path;

use anyhow::Result;
use dedup_core::{Contact, MatchResult};

use crate::config::CliConfig;
use crate::display;
use crate::input;

/// Fields of the contact being checked, as given on the command line.
pub struct CandidateArgs<'a> {
    pub id: Option<&'a str>,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl CandidateArgs<'_> {
    fn to_contact(&self) -> Contact {
        let mut contact = Contact::new(self.name);
        if let Some(id) = self.id {
            contact = contact.with_id(id);
        }
        if let Some(email) = self.email {
            contact = contact.with_email(email);
        }
        if let Some(phone) = self.phone {
            contact = contact.with_phone(phone);
        }
        contact
    }
}

/// Checks the candidate against `existing` with the configured matcher.
pub fn check_contact<'a>(
    config: &CliConfig,
    existing: &'a [Contact],
    candidate: &CandidateArgs<'_>,
) -> Result<MatchResult<'a>> {
    let matcher = config.matcher()?;
    Ok(matcher.check(&candidate.to_contact(), existing))
}

/// Runs the check and prints the verdict.
pub fn run(config: &CliConfig, existing_path: &Path, candidate: &CandidateArgs<'_>) -> Result<()> {
    let existing = input::load_contacts_json(existing_path)?;
    let result = check_contact(config, &existing, candidate)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::display_match(&result);
    }

    Ok(())
}
