//! `.env`-style config store management.
//!
//! The pipeline manages exactly one key in the store. The merge itself is a
//! pure function over text snapshots; [`update_env_file`] wraps it in a scoped
//! read-merge-write so no partial state is observable as success.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;
use tracing::debug;

/// Env-file key that carries the encoded cookie-jar document.
pub const COOKIES_ENV_KEY: &str = "YOUTUBE_COOKIES_BASE64";

/// Errors from env-file merging and persistence.
#[derive(Debug, thiserror::Error)]
pub enum EnvFileError {
    /// Reading or writing the env file failed.
    #[error("cannot access env file '{path}': {source}")]
    Io {
        /// The failing file path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The managed-key removal pattern could not be built.
    #[error("invalid env key pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Merges one `key=value` line into an env-file text blob.
///
/// Removes the single line (first match) that is exactly `key=...` — anchored
/// at line start and spanning to line end, so lines merely containing the key
/// as a substring stay untouched — then trims the remainder and appends the
/// fresh line with exactly one trailing newline. Idempotent per key; all
/// unrelated lines keep their content and relative order.
///
/// # Errors
///
/// Returns [`EnvFileError::Pattern`] when the removal pattern cannot be
/// compiled for `key`.
pub fn merge_env_line(
    existing: Option<&str>,
    key: &str,
    value: &str,
) -> Result<String, EnvFileError> {
    let existing = existing.unwrap_or("");
    let line_pattern = Regex::new(&format!(r"(?m)^{}=.*$", regex::escape(key)))?;
    let remainder = line_pattern.replace(existing, "");
    let merged = format!("{}\n{key}={value}", remainder.trim());
    Ok(format!("{}\n", merged.trim()))
}

/// Reads the env file if present, merges the managed key, and rewrites it.
///
/// The file is written whole; a failed write surfaces as an error rather than
/// partial success.
///
/// # Errors
///
/// Returns [`EnvFileError::Io`] with the failing path on read/write failure,
/// or [`EnvFileError::Pattern`] from the underlying merge.
pub fn update_env_file(path: &Path, key: &str, value: &str) -> Result<(), EnvFileError> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(error) if error.kind() == ErrorKind::NotFound => None,
        Err(error) => return Err(io_error(path, error)),
    };

    let merged = merge_env_line(existing.as_deref(), key, value)?;
    fs::write(path, merged).map_err(|error| io_error(path, error))?;

    debug!(path = %path.display(), key, "env file updated");
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> EnvFileError {
    EnvFileError::Io {
        path: path.display().to_string(),
        source,
    }
}
