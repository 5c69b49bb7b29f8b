// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Batch Classification
//!
//! Classifies an imported list of candidates against a fixed snapshot of
//! existing contacts. Candidates are never compared with each other, so two
//! identical rows in the same import are both reported as unique when the
//! snapshot contains neither.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::existing::ExistingSet;
use super::matcher::{DuplicateMatcher, MatchResult};
use crate::contact::Contact;
use crate::similarity::Similarity;

/// A candidate annotated with its duplicate verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedContact {
    #[serde(flatten)]
    pub contact: Contact,
    pub is_duplicate: bool,
    /// Match score, only set for duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_score: Option<f64>,
    /// Raw best-match percentage, set whatever the verdict.
    pub validation_percent: f64,
    /// Id of the existing contact this one duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,
}

impl ClassifiedContact {
    fn from_result(candidate: &Contact, result: &MatchResult<'_>) -> Self {
        ClassifiedContact {
            contact: candidate.clone(),
            is_duplicate: result.is_duplicate,
            duplicate_score: result.is_duplicate.then_some(result.score),
            validation_percent: result.best_score,
            matched_id: result
                .matched_contact
                .and_then(Contact::id)
                .map(str::to_string),
        }
    }
}

/// Counts for a classified batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub duplicates: usize,
    pub unique: usize,
}

impl BatchSummary {
    /// Tallies a classified batch.
    pub fn from_results(results: &[ClassifiedContact]) -> Self {
        let duplicates = results.iter().filter(|c| c.is_duplicate).count();
        BatchSummary {
            total: results.len(),
            duplicates,
            unique: results.len() - duplicates,
        }
    }
}

impl<S: Similarity + Sync> DuplicateMatcher<S> {
    /// Classifies one candidate against a precomputed set.
    pub fn classify(&self, candidate: &Contact, existing: &ExistingSet<'_>) -> ClassifiedContact {
        let result = self.check_against(candidate, existing);
        ClassifiedContact::from_result(candidate, &result)
    }

    /// Classifies every candidate against `existing`, preserving input order.
    ///
    /// Existing keys are computed once for the whole batch.
    pub fn classify_batch(
        &self,
        candidates: &[Contact],
        existing: &[Contact],
    ) -> Vec<ClassifiedContact> {
        let set = ExistingSet::new(existing);
        let results = self.classify_each(candidates, &set);

        let summary = BatchSummary::from_results(&results);
        info!(
            total = summary.total,
            duplicates = summary.duplicates,
            existing = set.len(),
            "classified import batch"
        );
        results
    }

    #[cfg(not(feature = "parallel"))]
    fn classify_each(
        &self,
        candidates: &[Contact],
        set: &ExistingSet<'_>,
    ) -> Vec<ClassifiedContact> {
        candidates
            .iter()
            .map(|candidate| self.classify(candidate, set))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn classify_each(
        &self,
        candidates: &[Contact],
        set: &ExistingSet<'_>,
    ) -> Vec<ClassifiedContact> {
        use rayon::prelude::*;

        // Indexed parallel iterators collect in input order.
        candidates
            .par_iter()
            .map(|candidate| self.classify(candidate, set))
            .collect()
    }
}

/// Classifies `candidates` against `existing` with the default matcher.
pub fn classify_batch(candidates: &[Contact], existing: &[Contact]) -> Vec<ClassifiedContact> {
    DuplicateMatcher::new().classify_batch(candidates, existing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Contact> {
        vec![Contact::new("John Doe")
            .with_id("1")
            .with_email("john@x.com")
            .with_phone("555-1111")]
    }

    #[test]
    fn test_duplicate_score_only_for_duplicates() {
        let candidates = vec![
            Contact::new("John Doe")
                .with_email("john@x.com")
                .with_phone("555-1111"),
            Contact::new("Jane Smith")
                .with_email("jane@y.com")
                .with_phone("555-2222"),
        ];

        let results = classify_batch(&candidates, &existing());
        assert!(results[0].is_duplicate);
        assert_eq!(results[0].duplicate_score, Some(100.0));
        assert_eq!(results[0].matched_id.as_deref(), Some("1"));

        assert!(!results[1].is_duplicate);
        assert_eq!(results[1].duplicate_score, None);
        assert!(results[1].validation_percent > 0.0);
        assert!(results[1].validation_percent <= 90.0);
    }

    #[test]
    fn test_summary_counts() {
        let candidates = vec![
            Contact::new("John Doe")
                .with_email("john@x.com")
                .with_phone("555-1111"),
            Contact::new("Zed"),
            Contact::new("Quinn"),
        ];
        let results = classify_batch(&candidates, &existing());

        assert_eq!(
            BatchSummary::from_results(&results),
            BatchSummary {
                total: 3,
                duplicates: 1,
                unique: 2
            }
        );
    }

    #[test]
    fn test_serialized_shape_flattens_contact() {
        let results = classify_batch(&[Contact::new("Zed")], &existing());
        let value = serde_json::to_value(&results[0]).unwrap();

        assert_eq!(value["name"], "Zed");
        assert_eq!(value["is_duplicate"], false);
        assert!(value.get("duplicate_score").is_none());
        assert!(value.get("validation_percent").is_some());
    }
}
