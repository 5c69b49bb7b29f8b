// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! Row-level checks applied to imported values before they become
//! contacts. These are shape checks only; nothing here talks to the
//! system of record.

use crate::error::ImportError;

/// Maximum length for any imported value.
pub const MAX_VALUE_LENGTH: usize = 1000;

/// Rejects values longer than [`MAX_VALUE_LENGTH`] characters.
pub fn validate_length(value: &str) -> Result<(), ImportError> {
    if value.chars().count() > MAX_VALUE_LENGTH {
        return Err(ImportError::ValueTooLong {
            max: MAX_VALUE_LENGTH,
        });
    }
    Ok(())
}

/// Fewest digits a phone number may have.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Validates a phone number: at least [`MIN_PHONE_DIGITS`] digits, written
/// with nothing but digits, spaces and `-`, `(`, `)`, `+`.
pub fn validate_phone(value: &str) -> Result<(), ImportError> {
    validate_length(value)?;

    let mut digits = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' | '+' => {}
            _ => return Err(ImportError::InvalidPhone),
        }
    }

    if digits < MIN_PHONE_DIGITS {
        return Err(ImportError::InvalidPhone);
    }
    Ok(())
}

/// Validates email format: exactly one `@` with text on both sides.
pub fn validate_email(value: &str) -> Result<(), ImportError> {
    validate_length(value)?;

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ImportError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ImportError::InvalidEmail);
    }

    Ok(())
}

/// Parses an external CRM identifier.
pub fn parse_id_crm(value: &str) -> Result<u64, ImportError> {
    value
        .parse::<u64>()
        .map_err(|_| ImportError::InvalidIdCrm(value.to_string()))
}
