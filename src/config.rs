//! Run configuration for the export pipeline.
//!
//! Connection and navigation parameters are configuration, not core logic;
//! the required-name set is an explicit value passed into validation rather
//! than a module-level constant.

use std::path::PathBuf;
use std::time::Duration;

/// Default remote-debugging endpoint (`chrome --remote-debugging-port=9222`).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9222";

/// Default site whose session cookies are exported.
pub const DEFAULT_TARGET_URL: &str = "https://youtube.com";

/// Default cookie-jar output path, overwritten each run.
pub const DEFAULT_OUTPUT_PATH: &str = "cookies.txt";

/// Default env config file path.
pub const DEFAULT_ENV_PATH: &str = ".env";

/// Default wait for the user to finish the interactive login, in seconds.
pub const DEFAULT_LOGIN_WAIT_SECS: u64 = 20;

/// Cookie names a valid authenticated YouTube session must carry.
pub const REQUIRED_COOKIE_NAMES: [&str; 8] = [
    "SID",
    "HSID",
    "SSID",
    "SAPISID",
    "APISID",
    "LOGIN_INFO",
    "VISITOR_INFO1_LIVE",
    "YSC",
];

/// Resolved settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Remote-debugging HTTP endpoint of the running browser.
    pub endpoint: String,
    /// URL opened for the login session.
    pub target_url: String,
    /// Cookie-jar output file.
    pub output_path: PathBuf,
    /// Env config file receiving the encoded artifact.
    pub env_path: PathBuf,
    /// Ordered required cookie names for session validation.
    pub required_names: Vec<String>,
    /// Fixed interactive-login wait before the snapshot.
    pub login_wait: Duration,
    /// Whether the encoded artifact is copied to the clipboard.
    pub use_clipboard: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            target_url: DEFAULT_TARGET_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            env_path: PathBuf::from(DEFAULT_ENV_PATH),
            required_names: default_required_names(),
            login_wait: Duration::from_secs(DEFAULT_LOGIN_WAIT_SECS),
            use_clipboard: true,
        }
    }
}

/// Returns the default required-name set as owned strings, in order.
#[must_use]
pub fn default_required_names() -> Vec<String> {
    REQUIRED_COOKIE_NAMES
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}
