//! Transport encoding for the cookie-jar document.
//!
//! Standard base64 with padding, so the artifact fits a single-line config
//! value and downstream consumers can recover the document byte-for-byte.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Errors from decoding an encoded artifact.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Input is not valid base64.
    #[error("encoded artifact is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    /// Decoded bytes are not valid UTF-8 text.
    #[error("decoded artifact is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes a document for transport. Lossless and reversible.
#[must_use]
pub fn encode_document(document: &str) -> String {
    STANDARD.encode(document.as_bytes())
}

/// Decodes an encoded artifact back into the original document.
///
/// # Errors
///
/// Returns [`EncodeError`] when the input is not valid base64 or the decoded
/// bytes are not UTF-8.
pub fn decode_document(encoded: &str) -> Result<String, EncodeError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
