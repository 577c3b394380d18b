//! WebSocket implementation of the persistent connection.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::domain::{ConnectionEvent, Connector};

/// Opens WebSocket connections to a fixed address.
#[derive(Debug, Clone)]
pub struct WebSocketConnector {
    url: String,
}

impl WebSocketConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Connector for WebSocketConnector {
    fn open(
        &self,
        events: mpsc::UnboundedSender<ConnectionEvent>,
    ) -> mpsc::UnboundedSender<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_attempt(self.url.clone(), events, rx));
        tx
    }
}

/// Drive one connection attempt until the channel is gone.
///
/// Every exit path ends with `Closed`, including a failed handshake.
async fn run_attempt(
    url: String,
    events: mpsc::UnboundedSender<ConnectionEvent>,
    mut outbound: mpsc::UnboundedReceiver<String>,
) {
    tracing::debug!("Connecting to {}", url);
    let ws_stream = match connect_async(url.as_str()).await {
        Ok((ws_stream, _)) => ws_stream,
        Err(e) => {
            tracing::warn!("WebSocket connect to {} failed: {}", url, e);
            let _ = events.send(ConnectionEvent::Failed(e.to_string()));
            let _ = events.send(ConnectionEvent::Closed(None));
            return;
        }
    };
    tracing::info!("Connected to {}", url);
    let _ = events.send(ConnectionEvent::Opened);

    let (mut write, mut read) = ws_stream.split();

    let reason = loop {
        tokio::select! {
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    tracing::debug!("Received frame: {}", text.as_str());
                    let _ = events.send(ConnectionEvent::Frame(text.as_str().to_string()));
                }
                Some(Ok(Message::Binary(bytes))) => {
                    let event = match std::str::from_utf8(&bytes) {
                        Ok(text) => ConnectionEvent::Frame(text.to_string()),
                        Err(e) => ConnectionEvent::Malformed(e.to_string()),
                    };
                    let _ = events.send(event);
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!("Server closed the connection");
                    break frame
                        .map(|f| f.reason.as_str().to_string())
                        .filter(|reason| !reason.is_empty());
                }
                // Ping/pong is handled by tungstenite
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error: {}", e);
                    let _ = events.send(ConnectionEvent::Failed(e.to_string()));
                    break None;
                }
                None => break None,
            },
            frame = outbound.recv() => match frame {
                Some(text) => {
                    if let Err(e) = write.send(Message::Text(text.into())).await {
                        tracing::warn!("Failed to send frame: {}", e);
                        let _ = events.send(ConnectionEvent::Failed(e.to_string()));
                        break None;
                    }
                }
                None => {
                    tracing::debug!("Closing connection to {}", url);
                    let _ = write.send(Message::Close(None)).await;
                    break None;
                }
            },
        }
    };

    let _ = events.send(ConnectionEvent::Closed(reason));
}
