// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! String Similarity
//!
//! Whole-string similarity strategies used to compare composite contact
//! keys. Every strategy returns a score in `[0.0, 1.0]` where identical
//! strings score `1.0`. Callers lower-case their input first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A symmetric, normalized string similarity measure.
///
/// Any `Fn(&str, &str) -> f64` closure is also a strategy, so tests and
/// callers can plug in their own measure without a wrapper type.
pub trait Similarity {
    /// Scores `a` against `b` in `[0.0, 1.0]`.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Share of the remaining distance each common leading character removes.
const PREFIX_SCALE: f64 = 0.1;

/// Jaro similarity with a Winkler-style boost for the common prefix.
///
/// Keys start with the contact name, so the whole common prefix counts, not
/// just its first four characters. Each shared leading character closes a
/// tenth of the gap left to `1.0`: a key that agrees on the full name and
/// differs in email and phone still scores high, but only identical
/// strings reach `1.0`. Two different people sharing a long first name
/// therefore never tie with an exact copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }

        let jaro = strsim::jaro(a, b);
        let prefix = a
            .chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .count();
        let remaining = (1.0 - PREFIX_SCALE).powi(i32::try_from(prefix).unwrap_or(i32::MAX));

        // A very long common prefix would otherwise round up to 1.0.
        (1.0 - (1.0 - jaro) * remaining).min(1.0 - f64::EPSILON)
    }
}

/// Levenshtein distance normalized by the longer string's length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizedLevenshtein;

impl Similarity for NormalizedLevenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

/// Built-in strategy selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityKind {
    #[default]
    JaroWinkler,
    Levenshtein,
}

impl SimilarityKind {
    /// Returns the configuration name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityKind::JaroWinkler => "jaro-winkler",
            SimilarityKind::Levenshtein => "levenshtein",
        }
    }
}

impl Similarity for SimilarityKind {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityKind::JaroWinkler => JaroWinkler.similarity(a, b),
            SimilarityKind::Levenshtein => NormalizedLevenshtein.similarity(a, b),
        }
    }
}

impl fmt::Display for SimilarityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => Ok(SimilarityKind::JaroWinkler),
            "levenshtein" => Ok(SimilarityKind::Levenshtein),
            other => Err(ConfigError::Parse(format!(
                "unknown similarity strategy '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(JaroWinkler.similarity("john doe", "john doe"), 1.0);
        assert_eq!(NormalizedLevenshtein.similarity("john doe", "john doe"), 1.0);
    }

    #[test]
    fn test_empty_strings_are_equal() {
        assert_eq!(JaroWinkler.similarity("", ""), 1.0);
        assert_eq!(NormalizedLevenshtein.similarity("", ""), 1.0);
    }

    #[test]
    fn test_empty_vs_non_empty_scores_zero() {
        assert_eq!(JaroWinkler.similarity("", "alice"), 0.0);
        assert_eq!(NormalizedLevenshtein.similarity("alice", ""), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = "john doe john@x.com 555-1111";
        let b = "jane smith jane@y.com 555-2222";
        assert!((JaroWinkler.similarity(a, b) - JaroWinkler.similarity(b, a)).abs() < 1e-12);
        assert!(
            (NormalizedLevenshtein.similarity(a, b) - NormalizedLevenshtein.similarity(b, a)).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_shared_first_name_stays_below_one() {
        let smith = "christopher smith csmith@other.org 555-9876";
        let jones = "christopher jones cjones@acme.com 555-0001";

        let score = JaroWinkler.similarity(smith, jones);
        assert!(score < 1.0);
        assert!(score > strsim::jaro(smith, jones));
    }

    #[test]
    fn test_full_name_match_scores_high() {
        let score = JaroWinkler.similarity(
            "robert lee robert.lee@different.com 555-9999",
            "robert lee rob@x.com 555-3333",
        );
        assert!(score > 0.9);
    }

    #[test]
    fn test_very_long_prefix_never_reaches_one() {
        let base = "a".repeat(2_000);
        let a = format!("{}x", base);
        let b = format!("{}y", base);
        assert!(JaroWinkler.similarity(&a, &b) < 1.0);
    }

    #[test]
    fn test_no_common_prefix_is_plain_jaro() {
        let a = "jane smith jane@y.com 555-2222";
        let b = "xjohn doe john@x.com 555-1111";
        assert!((JaroWinkler.similarity(a, b) - strsim::jaro(a, b)).abs() < 1e-12);
    }

    #[test]
    fn test_closure_is_strategy() {
        let exact = |a: &str, b: &str| if a == b { 1.0 } else { 0.0 };
        assert_eq!(exact.similarity("x", "x"), 1.0);
        assert_eq!(exact.similarity("x", "y"), 0.0);
    }

    #[test]
    fn test_kind_dispatches_to_strategy() {
        let a = "robert lee";
        let b = "roberta leigh";
        assert_eq!(
            SimilarityKind::JaroWinkler.similarity(a, b),
            JaroWinkler.similarity(a, b)
        );
        assert_eq!(
            SimilarityKind::Levenshtein.similarity(a, b),
            NormalizedLevenshtein.similarity(a, b)
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "jaro-winkler".parse::<SimilarityKind>().unwrap(),
            SimilarityKind::JaroWinkler
        );
        assert_eq!(
            " Levenshtein ".parse::<SimilarityKind>().unwrap(),
            SimilarityKind::Levenshtein
        );
        assert!("soundex".parse::<SimilarityKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips_through_from_str() {
        for kind in [SimilarityKind::JaroWinkler, SimilarityKind::Levenshtein] {
            assert_eq!(kind.to_string().parse::<SimilarityKind>().unwrap(), kind);
        }
    }
}
