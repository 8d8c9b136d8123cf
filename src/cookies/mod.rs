//! Cookie snapshot model and the validation/serialization pipeline.
//!
//! A snapshot is an ordered sequence of [`CookieRecord`]s captured from the
//! browser session. The pipeline never mutates a record; it only derives the
//! cookie-jar document and its encoded form.

mod encode;
mod netscape;
mod validate;

pub use encode::{EncodeError, decode_document, encode_document};
pub use netscape::{NETSCAPE_HEADER, to_netscape_document};
pub use validate::{ValidationError, validate_required};

use std::fmt;

/// One browser cookie at snapshot time.
///
/// The value field is intentionally redacted in Debug output to prevent
/// accidental logging of sensitive session data.
#[derive(Clone)]
pub struct CookieRecord {
    /// Cookie name (dedup key for validation, case-sensitive).
    pub name: String,
    /// Cookie value (sensitive — never log).
    value: String,
    /// The domain the cookie belongs to; a leading `.` means subdomain match.
    pub domain: String,
    /// The URL path scope for the cookie; may be empty.
    pub path: String,
    /// Whether the cookie should only be sent over HTTPS.
    pub secure: bool,
    /// Unix timestamp for expiry in seconds (`None` = session cookie).
    pub expires: Option<u64>,
}

impl CookieRecord {
    /// Creates a new cookie record.
    #[must_use]
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        secure: bool,
        expires: Option<u64>,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            secure,
            expires,
        }
    }

    /// Returns the cookie value.
    ///
    /// Cookie values are sensitive — avoid logging the return value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// Custom Debug impl that redacts the cookie value.
impl fmt::Debug for CookieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieRecord")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("path", &self.path)
            .field("secure", &self.secure)
            .field("expires", &self.expires)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_record_debug_redacts_value() {
        let record = CookieRecord::new(
            "SID".to_string(),
            "super_secret_token".to_string(),
            ".youtube.com".to_string(),
            "/".to_string(),
            true,
            Some(1_700_000_000),
        );
        let debug_str = format!("{record:?}");
        assert!(
            debug_str.contains("[REDACTED]"),
            "Debug output should contain [REDACTED]"
        );
        assert!(
            !debug_str.contains("super_secret_token"),
            "Debug output must NOT contain the actual value"
        );
    }

    #[test]
    fn test_cookie_record_value_accessor() {
        let record = CookieRecord::new(
            "YSC".to_string(),
            "abc".to_string(),
            "youtube.com".to_string(),
            String::new(),
            false,
            None,
        );
        assert_eq!(record.value(), "abc");
        assert_eq!(record.expires, None);
    }
}
