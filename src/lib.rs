//! ytcookies core library
//!
//! This library provides the core functionality for the ytcookies tool, which
//! exports an authenticated browser session's cookies through the Chrome
//! remote-debugging protocol into a Netscape cookie-jar file and an encoded
//! env-file entry for reuse by other processes.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`browser`] - Remote-debugging session: target creation, navigation, cookie snapshot
//! - [`cookies`] - Snapshot model, required-name validation, jar serialization, transport encoding
//! - [`envfile`] - Env-file merge of the encoded artifact
//! - [`clipboard`] - System clipboard hand-off
//! - [`config`] - Run configuration and defaults

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod clipboard;
pub mod config;
pub mod cookies;
pub mod envfile;

// Re-export commonly used types
pub use browser::{BrowserSession, CdpError};
pub use clipboard::{ClipboardError, copy_text};
pub use config::{
    DEFAULT_ENDPOINT, DEFAULT_ENV_PATH, DEFAULT_LOGIN_WAIT_SECS, DEFAULT_OUTPUT_PATH,
    DEFAULT_TARGET_URL, ExportConfig, REQUIRED_COOKIE_NAMES, default_required_names,
};
pub use cookies::{
    CookieRecord, EncodeError, NETSCAPE_HEADER, ValidationError, decode_document, encode_document,
    to_netscape_document, validate_required,
};
pub use envfile::{COOKIES_ENV_KEY, EnvFileError, merge_env_line, update_env_file};
