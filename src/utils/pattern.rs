//! Glob matching for names and `~`/`$VAR` expansion for user-supplied paths.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// True when `name` matches any of `patterns`. An empty pattern list matches nothing.
pub fn matches_any(patterns: &[String], name: &str) -> bool {
    patterns.iter().any(|p| glob_match::glob_match(p, name))
}

/// Expand `~` and environment variables in a path argument.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| {
        Error::validation_invalid_argument(
            "path",
            format!("Cannot expand '{}': {}", raw, e),
            Some(raw.to_string()),
            None,
        )
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}
