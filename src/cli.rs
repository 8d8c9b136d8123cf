//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use ytcookies_core::{
    DEFAULT_ENDPOINT, DEFAULT_ENV_PATH, DEFAULT_LOGIN_WAIT_SECS, DEFAULT_OUTPUT_PATH,
    DEFAULT_TARGET_URL, ExportConfig, default_required_names,
};

/// Export an authenticated browser session's cookies for reuse.
///
/// ytcookies attaches to a running Chrome instance over the remote-debugging
/// protocol, waits for you to log in, then writes a Netscape cookie-jar file
/// and merges its base64 encoding into an .env config file.
#[derive(Parser, Debug)]
#[command(name = "ytcookies")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Chrome remote-debugging endpoint
    #[arg(short = 'e', long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Site to open for the login session
    #[arg(short = 'u', long, default_value = DEFAULT_TARGET_URL)]
    pub url: String,

    /// Cookie-jar output file (overwritten each run)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Env config file receiving the encoded cookie jar
    #[arg(long, default_value = DEFAULT_ENV_PATH)]
    pub env_file: PathBuf,

    /// Seconds to wait for the interactive login before the snapshot (0-600)
    #[arg(short = 'w', long, default_value_t = DEFAULT_LOGIN_WAIT_SECS, value_parser = clap::value_parser!(u64).range(0..=600))]
    pub wait: u64,

    /// Required cookie name (repeat to replace the default session set)
    #[arg(short = 'r', long = "required", value_name = "NAME")]
    pub required: Vec<String>,

    /// Skip copying the encoded cookie jar to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}

impl Args {
    /// Resolves the parsed arguments into an export run configuration.
    pub fn into_config(self) -> ExportConfig {
        let required_names = if self.required.is_empty() {
            default_required_names()
        } else {
            self.required
        };

        ExportConfig {
            endpoint: self.endpoint,
            target_url: self.url,
            output_path: self.output,
            env_path: self.env_file,
            required_names,
            login_wait: Duration::from_secs(self.wait),
            use_clipboard: !self.no_clipboard,
        }
    }
}
