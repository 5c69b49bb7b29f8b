// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Matcher Configuration
//!
//! Policy knobs for the duplicate check. The similarity threshold and the
//! corroboration signals are tuning decisions, so they live here instead of
//! being baked into the matcher.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::similarity::SimilarityKind;

/// Best-match percentage a candidate must exceed to be considered at all.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 90.0;

/// Configuration for [`DuplicateMatcher`](super::DuplicateMatcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Scores at or below this percentage are never duplicates
    pub threshold_percent: f64,

    /// Accept a case-insensitive exact name match as corroboration
    pub match_on_name: bool,

    /// Accept a case-insensitive exact email match as corroboration
    pub match_on_email: bool,

    /// Similarity strategy used for composite keys
    pub similarity: SimilarityKind,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            match_on_name: true,
            match_on_email: true,
            similarity: SimilarityKind::default(),
        }
    }
}

impl MatcherConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the similarity threshold (percentage).
    pub fn with_threshold(mut self, threshold_percent: f64) -> Self {
        self.threshold_percent = threshold_percent;
        self
    }

    /// Sets the similarity strategy.
    pub fn with_similarity(mut self, similarity: SimilarityKind) -> Self {
        self.similarity = similarity;
        self
    }

    /// Stops treating a name match as corroboration.
    pub fn without_name_match(mut self) -> Self {
        self.match_on_name = false;
        self
    }

    /// Stops treating an email match as corroboration.
    pub fn without_email_match(mut self) -> Self {
        self.match_on_email = false;
        self
    }

    /// Checks that the threshold is a percentage and that at least one
    /// corroboration signal remains enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.threshold_percent) {
            return Err(ConfigError::InvalidThreshold(self.threshold_percent));
        }
        if !self.match_on_name && !self.match_on_email {
            return Err(ConfigError::NoCorroboration);
        }
        Ok(())
    }
}
