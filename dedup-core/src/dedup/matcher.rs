// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-Candidate Duplicate Check
//!
//! Finds the existing contact whose composite key is most similar to the
//! candidate's, then applies two gates: the best score must exceed the
//! configured threshold, and an exact name or email match must corroborate
//! it. High fuzzy similarity on its own is never enough.

use serde::Serialize;
use tracing::{debug, trace};

use super::config::MatcherConfig;
use super::existing::ExistingSet;
use crate::contact::{contact_key, Contact};
use crate::error::ConfigError;
use crate::similarity::{Similarity, SimilarityKind};

/// Exact-match signal that confirmed a duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corroboration {
    /// Names are equal ignoring case.
    Name,
    /// Both emails are present and equal ignoring case.
    Email,
}

/// Why a duplicate check reached its verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Nothing left to compare against after self-exclusion.
    NoCandidates,
    /// The best match did not exceed the threshold.
    BelowThreshold,
    /// The best match exceeded the threshold but neither name nor email agreed.
    Unconfirmed,
    /// The best match is a duplicate.
    Duplicate(Corroboration),
}

/// Result of checking one candidate against the existing contacts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    /// True if the candidate is a near-duplicate of `matched_contact`.
    pub is_duplicate: bool,
    /// Similarity percentage of the duplicate; 0 for every non-duplicate.
    pub score: f64,
    /// The existing contact judged to be the duplicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_contact: Option<&'a Contact>,
    /// Best-match percentage before either gate was applied.
    pub best_score: f64,
    pub outcome: MatchOutcome,
}

impl<'a> MatchResult<'a> {
    fn rejected(outcome: MatchOutcome, best_score: f64) -> Self {
        MatchResult {
            is_duplicate: false,
            score: 0.0,
            matched_contact: None,
            best_score,
            outcome,
        }
    }

    fn duplicate(matched: &'a Contact, score: f64, signal: Corroboration) -> Self {
        MatchResult {
            is_duplicate: true,
            score,
            matched_contact: Some(matched),
            best_score: score,
            outcome: MatchOutcome::Duplicate(signal),
        }
    }
}

/// Fuzzy duplicate matcher.
///
/// Stateless apart from its policy: every call works on the slices it is
/// given and never mutates them.
#[derive(Debug, Clone)]
pub struct DuplicateMatcher<S = SimilarityKind> {
    config: MatcherConfig,
    similarity: S,
}

impl Default for DuplicateMatcher {
    fn default() -> Self {
        let config = MatcherConfig::default();
        DuplicateMatcher {
            similarity: config.similarity,
            config,
        }
    }
}

impl DuplicateMatcher {
    /// Creates a matcher with the default policy (90%, name or email).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher using the strategy named in `config`.
    pub fn from_config(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(DuplicateMatcher {
            similarity: config.similarity,
            config,
        })
    }
}

impl<S: Similarity> DuplicateMatcher<S> {
    /// Creates a matcher with a caller-supplied similarity strategy.
    ///
    /// `config.similarity` is ignored.
    pub fn with_similarity(config: MatcherConfig, similarity: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(DuplicateMatcher { config, similarity })
    }

    /// Returns the matcher's policy.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Scores two composite keys, clamped to `[0.0, 1.0]`.
    pub fn score_keys(&self, a: &str, b: &str) -> f64 {
        let score = self.similarity.similarity(a, b);
        if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        }
    }

    /// Checks `candidate` against `existing`.
    pub fn check<'a>(&self, candidate: &Contact, existing: &'a [Contact]) -> MatchResult<'a> {
        self.check_against(candidate, &ExistingSet::new(existing))
    }

    /// Checks `candidate` against a set whose keys were already computed.
    ///
    /// An existing contact with the candidate's own id is skipped.
    pub fn check_against<'a>(
        &self,
        candidate: &Contact,
        existing: &ExistingSet<'a>,
    ) -> MatchResult<'a> {
        let candidate_key = contact_key(candidate);

        let mut best: Option<(&'a Contact, f64)> = None;
        for (contact, key) in existing.iter() {
            if candidate.is_same_record(contact) {
                continue;
            }
            let score = self.score_keys(&candidate_key, key);
            // Strictly greater keeps the first of equal scores.
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((contact, score)),
            }
        }

        let Some((matched, score)) = best else {
            trace!(candidate = candidate.name(), "no contacts to compare against");
            return MatchResult::rejected(MatchOutcome::NoCandidates, 0.0);
        };

        let score_percentage = score * 100.0;
        trace!(
            candidate = candidate.name(),
            best_match = matched.name(),
            score = score_percentage,
            "best match"
        );

        if score_percentage <= self.config.threshold_percent {
            return MatchResult::rejected(MatchOutcome::BelowThreshold, score_percentage);
        }

        match self.corroborate(candidate, matched) {
            Some(signal) => {
                debug!(
                    candidate = candidate.name(),
                    matched_id = matched.id().unwrap_or_default(),
                    score = score_percentage,
                    signal = ?signal,
                    "duplicate found"
                );
                MatchResult::duplicate(matched, score_percentage, signal)
            }
            None => {
                debug!(
                    candidate = candidate.name(),
                    best_match = matched.name(),
                    score = score_percentage,
                    "similar contact not corroborated by name or email"
                );
                MatchResult::rejected(MatchOutcome::Unconfirmed, score_percentage)
            }
        }
    }

    /// Returns the first enabled exact-match signal between two contacts.
    fn corroborate(&self, candidate: &Contact, matched: &Contact) -> Option<Corroboration> {
        if self.config.match_on_name
            && candidate.name().to_lowercase() == matched.name().to_lowercase()
        {
            return Some(Corroboration::Name);
        }

        if self.config.match_on_email {
            if let (Some(a), Some(b)) = (candidate.email(), matched.email()) {
                if !a.is_empty() && !b.is_empty() && a.to_lowercase() == b.to_lowercase() {
                    return Some(Corroboration::Email);
                }
            }
        }

        None
    }
}

/// Checks `candidate` against `existing` with the default matcher.
pub fn check_duplicate<'a>(candidate: &Contact, existing: &'a [Contact]) -> MatchResult<'a> {
    DuplicateMatcher::new().check(candidate, existing)
}
