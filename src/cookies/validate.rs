//! Required-cookie completeness check for a session snapshot.

use std::collections::HashSet;

use tracing::debug;

use super::CookieRecord;

/// Errors from snapshot validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more required cookies are absent from the snapshot.
    ///
    /// The list preserves the order of the required-name set, so the
    /// diagnostic reads the same way the set was configured.
    #[error("missing required cookies: {}", .0.join(", "))]
    MissingCookies(Vec<String>),
}

/// Checks that every required cookie name is present in the snapshot.
///
/// Name matching is exact and case-sensitive. All missing names are collected
/// in one pass — no short-circuit on the first miss — so the caller gets the
/// complete list in the original required order.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCookies`] with the ordered missing-name
/// list when any required cookie is absent.
pub fn validate_required(
    records: &[CookieRecord],
    required: &[String],
) -> Result<(), ValidationError> {
    let present: HashSet<&str> = records.iter().map(|record| record.name.as_str()).collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !present.contains(name.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        debug!(
            cookies = records.len(),
            required = required.len(),
            "required cookies present"
        );
        Ok(())
    } else {
        Err(ValidationError::MissingCookies(missing))
    }
}
