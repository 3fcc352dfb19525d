//! Argument checks shared by the CLI and rename plans.

use crate::error::{Error, Result};

/// Trimmed `value`, or `validation.invalid_argument` for `field` when blank.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

pub fn require_non_empty_vec<'a, T>(items: &'a [T], field: &str, message: &str) -> Result<&'a [T]> {
    if items.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(items)
    }
}
