//! Browser session collaborator over the Chrome remote-debugging protocol.
//!
//! Connects to a running Chrome instance (started with
//! `--remote-debugging-port`), creates a fresh page target through the
//! debugging HTTP API, and drives it over the DevTools WebSocket: navigation
//! plus a one-shot cookie snapshot.

mod cdp;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::cookies::CookieRecord;
use cdp::CdpConnection;

/// Errors from the remote-debugging browser session.
#[derive(Debug, thiserror::Error)]
pub enum CdpError {
    /// The debugging HTTP endpoint is unreachable or answered badly.
    #[error("cannot reach remote-debugging endpoint: {0}")]
    Endpoint(#[from] reqwest::Error),
    /// WebSocket transport failure.
    #[error("devtools websocket failed: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
    /// A CDP message could not be parsed.
    #[error("malformed devtools message: {0}")]
    Message(#[from] serde_json::Error),
    /// The endpoint created a target without a debugger WebSocket URL.
    #[error("debugging endpoint returned no attachable page target")]
    Target,
    /// The browser answered a command with an error object.
    #[error("devtools command {method} failed: {message}")]
    Protocol {
        /// The CDP method that failed.
        method: String,
        /// Error message reported by the browser.
        message: String,
    },
    /// The connection dropped before a command reply arrived.
    #[error("devtools connection closed before a reply arrived")]
    ConnectionClosed,
}

/// Page-target metadata returned by the debugging HTTP API.
#[derive(Debug, Deserialize)]
struct TargetInfo {
    id: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    web_socket_debugger_url: Option<String>,
}

/// `Network.getCookies` result payload.
#[derive(Deserialize)]
struct CookieSnapshot {
    #[serde(default)]
    cookies: Vec<WireCookie>,
}

/// One cookie as reported on the CDP wire. No Debug impl so the value can
/// never leak into logs.
#[derive(Deserialize)]
struct WireCookie {
    name: String,
    value: String,
    domain: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    secure: bool,
    expires: Option<f64>,
}

impl WireCookie {
    fn into_record(self) -> CookieRecord {
        let expires = normalized_expiry(self.expires);
        CookieRecord::new(
            self.name,
            self.value,
            self.domain,
            self.path,
            self.secure,
            expires,
        )
    }
}

/// Maps the CDP expiry to Unix seconds.
///
/// The wire value is a float where `-1` (and sometimes `0` or absence) marks
/// a session cookie; positive finite values are floored.
fn normalized_expiry(raw_expiry: Option<f64>) -> Option<u64> {
    let raw_expiry = raw_expiry?;
    if !raw_expiry.is_finite() || raw_expiry <= 0.0 {
        return None;
    }

    let floored = raw_expiry.floor();
    let integer_text = format!("{floored:.0}");
    // Overflow only reachable with expiry values exceeding u64::MAX
    // (~year 584 billion); treat as far-future.
    Some(integer_text.parse::<u64>().unwrap_or(u64::MAX))
}

/// An attached page target on a remote-debugged browser.
pub struct BrowserSession {
    connection: CdpConnection,
    target_id: String,
}

impl BrowserSession {
    /// Creates a fresh page target on the browser behind `endpoint` and
    /// attaches to its debugger WebSocket.
    ///
    /// # Errors
    ///
    /// Returns [`CdpError`] when the endpoint is unreachable, the target
    /// carries no debugger URL, or the WebSocket handshake fails.
    pub async fn connect(endpoint: &str) -> Result<Self, CdpError> {
        let create_url = format!("{}/json/new", endpoint.trim_end_matches('/'));
        // Chrome 111+ requires PUT for /json/new.
        let target: TargetInfo = reqwest::Client::new()
            .put(&create_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let ws_url = target.web_socket_debugger_url.ok_or(CdpError::Target)?;

        let connection = CdpConnection::connect(&ws_url).await?;
        info!(target = %target.id, "attached to browser page target");
        Ok(Self {
            connection,
            target_id: target.id,
        })
    }

    /// Navigates the attached page to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`CdpError`] on transport failure or a protocol error reply.
    pub async fn navigate(&mut self, url: &str) -> Result<(), CdpError> {
        debug!(url, "navigating page target");
        self.connection
            .send_command("Page.navigate", json!({ "url": url }))
            .await?;
        Ok(())
    }

    /// Snapshots the cookies visible to the attached page.
    ///
    /// Issued without a URL filter so the snapshot matches the page-level
    /// cookie view. Records are returned in wire order.
    ///
    /// # Errors
    ///
    /// Returns [`CdpError`] on transport failure, a protocol error reply, or
    /// an unparseable result payload.
    pub async fn snapshot_cookies(&mut self) -> Result<Vec<CookieRecord>, CdpError> {
        let result = self
            .connection
            .send_command("Network.getCookies", json!({}))
            .await?;
        let snapshot: CookieSnapshot = serde_json::from_value(result)?;
        debug!(cookies = snapshot.cookies.len(), "cookie snapshot taken");
        Ok(snapshot
            .cookies
            .into_iter()
            .map(WireCookie::into_record)
            .collect())
    }

    /// Detaches from the page target, closing the WebSocket cleanly.
    ///
    /// The page itself stays open in the browser so the user keeps their
    /// logged-in tab.
    pub async fn disconnect(self) {
        debug!(target = %self.target_id, "detaching from page target");
        self.connection.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_expiry_maps_session_sentinels_to_none() {
        assert_eq!(normalized_expiry(None), None);
        assert_eq!(normalized_expiry(Some(-1.0)), None);
        assert_eq!(normalized_expiry(Some(0.0)), None);
        assert_eq!(normalized_expiry(Some(f64::NAN)), None);
        assert_eq!(normalized_expiry(Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_normalized_expiry_floors_fractional_timestamps() {
        assert_eq!(normalized_expiry(Some(1_700_000_000.9)), Some(1_700_000_000));
    }

    #[test]
    fn test_wire_cookie_deserializes_with_defaults() {
        let wire: WireCookie = serde_json::from_value(serde_json::json!({
            "name": "SID",
            "value": "abc",
            "domain": ".youtube.com",
            "httpOnly": true,
            "session": true
        }))
        .unwrap();
        let record = wire.into_record();
        assert_eq!(record.name, "SID");
        assert_eq!(record.path, "");
        assert!(!record.secure);
        assert_eq!(record.expires, None);
    }

    #[test]
    fn test_wire_cookie_maps_expiry_into_record() {
        let wire: WireCookie = serde_json::from_value(serde_json::json!({
            "name": "SID",
            "value": "abc",
            "domain": "youtube.com",
            "path": "/",
            "secure": true,
            "expires": 1_700_000_000.5
        }))
        .unwrap();
        let record = wire.into_record();
        assert!(record.secure);
        assert_eq!(record.expires, Some(1_700_000_000));
    }

    #[test]
    fn test_cookie_snapshot_tolerates_missing_cookie_array() {
        let snapshot: CookieSnapshot = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(snapshot.cookies.is_empty());
    }

    #[test]
    fn test_target_info_requires_debugger_url_downstream() {
        let target: TargetInfo = serde_json::from_value(serde_json::json!({
            "id": "ABC123",
            "type": "page"
        }))
        .unwrap();
        assert_eq!(target.id, "ABC123");
        assert!(target.web_socket_debugger_url.is_none());
    }
}
