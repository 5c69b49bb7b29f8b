//! Duplicate Detection
//!
//! Single-candidate checks and batch classification against a snapshot of
//! existing contacts.

mod batch;
mod config;
mod existing;
mod matcher;

pub use batch::{classify_batch, BatchSummary, ClassifiedContact};
pub use config::{MatcherConfig, DEFAULT_THRESHOLD_PERCENT};
pub use existing::ExistingSet;
pub use matcher::{check_duplicate, Corroboration, DuplicateMatcher, MatchOutcome, MatchResult};
