//! Export command: the single-shot cookie extraction pipeline.
//!
//! Connect → navigate → fixed login wait → snapshot → validate → serialize →
//! write jar file → encode → clipboard → env-file merge. Stages run strictly
//! in sequence; every failure is terminal for the run.

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;
use tracing::{debug, info};

use ytcookies_core::{
    BrowserSession, COOKIES_ENV_KEY, ExportConfig, copy_text, encode_document,
    to_netscape_document, update_env_file, validate_required,
};

pub async fn run_export_command(config: ExportConfig) -> Result<()> {
    let target_url = url::Url::parse(&config.target_url)
        .with_context(|| format!("invalid target URL '{}'", config.target_url))?;
    url::Url::parse(&config.endpoint)
        .with_context(|| format!("invalid remote-debugging endpoint '{}'", config.endpoint))?;

    info!(endpoint = %config.endpoint, "connecting to remote-debugging browser");
    let mut session = BrowserSession::connect(&config.endpoint)
        .await
        .with_context(|| {
            format!(
                "cannot attach to the browser at {} (is Chrome running with --remote-debugging-port?)",
                config.endpoint
            )
        })?;

    session.navigate(target_url.as_str()).await?;
    info!(url = %target_url, "log in to the site in the attached browser window");
    wait_for_login(config.login_wait).await;

    let records = session.snapshot_cookies().await?;
    debug!(cookies = records.len(), "session snapshot captured");
    session.disconnect().await;

    // Validate before any write so an incomplete session leaves no artifacts.
    validate_required(&records, &config.required_names)?;

    let document = to_netscape_document(&records);
    fs::write(&config.output_path, &document).with_context(|| {
        format!(
            "cannot write cookie jar '{}'",
            config.output_path.display()
        )
    })?;
    info!(
        path = %config.output_path.display(),
        cookies = records.len(),
        "cookie jar written"
    );

    let encoded = encode_document(&document);

    if config.use_clipboard {
        copy_text(&encoded)?;
        info!("encoded cookie jar copied to clipboard");
    }

    update_env_file(&config.env_path, COOKIES_ENV_KEY, &encoded)?;
    info!(
        path = %config.env_path.display(),
        key = COOKIES_ENV_KEY,
        "env file updated"
    );

    Ok(())
}

/// Fixed suspension for the interactive login; no cancellation hook.
///
/// A countdown bar keeps the wait visible so the user knows when the snapshot
/// will be taken.
async fn wait_for_login(wait: Duration) {
    if wait.is_zero() {
        return;
    }

    let seconds = wait.as_secs();
    let bar = ProgressBar::new(seconds);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}s")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("waiting for login");

    for _ in 0..seconds {
        sleep(Duration::from_secs(1)).await;
        bar.inc(1);
    }
    bar.finish_and_clear();
}
