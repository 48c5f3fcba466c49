//! Validation error types

use std::fmt;

/// Validation error for submitted form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty (or only whitespace)
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `s` and enforce a character limit, rejecting blank input.
pub(crate) fn required(
    s: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    optional(trimmed, field, max).map(|v| v.unwrap_or_default())
}

/// Trim `s` and enforce a character limit; blank input becomes `None`.
pub(crate) fn optional(
    s: &str,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    // Column limits are VARCHAR(n), which count characters rather than bytes
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(Some(trimmed.to_owned()))
}
