// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Matching itself never fails; errors only come from configuration and
//! from validating import rows before they reach the matcher.

use thiserror::Error;

/// Matcher configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Threshold must be a percentage between 0 and 100, got {0}")]
    InvalidThreshold(f64),
    #[error("At least one corroboration signal (name or email) must be enabled")]
    NoCorroboration,
    #[error("Invalid configuration: {0}")]
    Parse(String),
}

/// Import row validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Name is required")]
    MissingName,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid phone number format")]
    InvalidPhone,
    #[error("id_crm must be a non-negative integer, got '{0}'")]
    InvalidIdCrm(String),
    #[error("Value too long (max {max} characters)")]
    ValueTooLong { max: usize },
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err.to_string())
    }
}

/// Unified error type for dedup operations.
#[derive(Error, Debug)]
pub enum DedupError {
    /// Matcher configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An import row or file could not be read.
    #[error("import error: {0}")]
    Import(#[from] ImportError),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for dedup operations.
pub type DedupResult<T> = Result<T, DedupError>;
