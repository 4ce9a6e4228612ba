//! Form validation helpers
//!
//! Pre-submit checks for the console's edit forms. A failing check stops the
//! save before any request is built.

use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: hotel, room type, amenity, company, rate plan, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, codes, registration numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Minimum password length accepted by the account service
pub const MIN_PASSWORD_LEN: usize = 4;

/// A single failed form check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Pre-submit check of an edit form
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.len() > max_len {
        return Err(ValidationError::new(
            field,
            format!("is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate a required, well-formed email address.
pub fn validate_email(value: &str, field: &'static str) -> Result<(), ValidationError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    if !is_valid_email(value) {
        return Err(ValidationError::new(field, "is not a valid email address"));
    }
    Ok(())
}

/// Validate an email address only when one was entered.
pub fn validate_optional_email(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_email(value, field)
}

/// Validate a new password: non-blank and at least [`MIN_PASSWORD_LEN`] chars.
pub fn validate_password(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            field,
            format!("must be at least {MIN_PASSWORD_LEN} characters long"),
        ));
    }
    Ok(())
}

pub fn validate_positive(value: i64, field: &'static str) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::new(field, "must be positive"));
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
