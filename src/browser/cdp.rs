//! Low-level Chrome DevTools Protocol connection.
//!
//! JSON-RPC command/response exchange over a page target's WebSocket.
//! Commands carry sequential ids; replies are matched by id and protocol
//! events (messages without an id) are skipped.

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, trace};

use super::CdpError;

pub(super) struct CdpConnection {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
    next_id: u64,
}

impl CdpConnection {
    /// Attaches to the debugger WebSocket of a page target.
    pub(super) async fn connect(ws_url: &str) -> Result<Self, CdpError> {
        debug!(url = %ws_url, "connecting to CDP websocket");
        let (socket, _response) = connect_async(ws_url).await?;
        Ok(Self { socket, next_id: 0 })
    }

    /// Sends one CDP command and waits for the matching reply.
    ///
    /// Returns the command's `result` payload, or [`CdpError::Protocol`] when
    /// the browser answers with an error object.
    pub(super) async fn send_command(
        &mut self,
        method: &str,
        params: Value,
    ) -> Result<Value, CdpError> {
        self.next_id += 1;
        let id = self.next_id;
        let envelope = json!({ "id": id, "method": method, "params": params });
        trace!(id, method, "sending CDP command");
        self.socket.send(Message::Text(envelope.to_string())).await?;

        loop {
            let message = self
                .socket
                .next()
                .await
                .ok_or(CdpError::ConnectionClosed)??;
            let Message::Text(payload) = message else {
                continue;
            };
            let parsed: Value = serde_json::from_str(&payload)?;
            match parsed.get("id").and_then(Value::as_u64) {
                Some(reply_id) if reply_id == id => {
                    if let Some(error) = parsed.get("error") {
                        return Err(CdpError::Protocol {
                            method: method.to_string(),
                            message: error
                                .get("message")
                                .and_then(Value::as_str)
                                .unwrap_or("unknown protocol error")
                                .to_string(),
                        });
                    }
                    return Ok(parsed.get("result").cloned().unwrap_or(Value::Null));
                }
                // Reply for an earlier command, or an event notification.
                Some(_) | None => continue,
            }
        }
    }

    /// Closes the WebSocket cleanly; the page target itself is left open.
    pub(super) async fn close(mut self) {
        let _ = self.socket.close(None).await;
    }
}
