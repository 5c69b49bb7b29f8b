// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dedup Core Library
//!
//! Fuzzy duplicate detection for CRM contacts. A candidate contact is
//! compared against a snapshot of existing contacts through a composite
//! `name email phone` key; a high similarity score only counts as a
//! duplicate when an exact name or email match corroborates it.

pub mod contact;
pub mod dedup;
pub mod error;
pub mod import;
pub mod similarity;

pub use contact::{contact_key, Contact};
pub use dedup::{
    check_duplicate, classify_batch, BatchSummary, ClassifiedContact, Corroboration,
    DuplicateMatcher, ExistingSet, MatchOutcome, MatchResult, MatcherConfig,
    DEFAULT_THRESHOLD_PERCENT,
};
pub use error::{ConfigError, DedupError, DedupResult, ImportError};
pub use import::{
    find_id_crm_conflicts, read_csv, read_csv_path, IdCrmConflict, ImportRecord, RowOutcome,
};
pub use similarity::{JaroWinkler, NormalizedLevenshtein, Similarity, SimilarityKind};
