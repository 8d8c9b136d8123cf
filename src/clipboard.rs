//! System clipboard collaborator.
//!
//! Receives the encoded artifact verbatim; no transformation happens here.

use arboard::Clipboard;
use tracing::debug;

/// Clipboard errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened or written.
    #[error("clipboard access failed: {0}")]
    AccessFailed(String),
}

/// Places `text` on the system clipboard unchanged.
///
/// # Errors
///
/// Returns [`ClipboardError::AccessFailed`] when the clipboard cannot be
/// opened or the write fails.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|error| ClipboardError::AccessFailed(error.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|error| ClipboardError::AccessFailed(error.to_string()))?;
    debug!(bytes = text.len(), "copied encoded artifact to clipboard");
    Ok(())
}
