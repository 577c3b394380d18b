//! Persistent-connection chat client.
//!
//! [`ConnectionManager`] owns the channel to the backend and consumes the
//! events of one attempt at a time in a single dispatch loop:
//!
//! ```text
//! Disconnected → Connecting → Open → (Closed) → Disconnected → wait → Connecting ...
//! ```
//!
//! Reconnection is driven only by closure and retries forever after a fixed
//! delay. Rendering goes through [`ChatLog`].

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::{
    domain::{ChatLog, ConnectionEvent, ConnectionState, Connector, MessageContent, Speaker},
    infrastructure::dto::websocket::{IncomingFrame, OutgoingMessage},
};

/// Delay between a closure and the next connection attempt
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Why a message was not sent
#[derive(Debug, Error)]
pub enum SendError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("connection is not open")]
    NotOpen,

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct ConnectionManager {
    connector: Arc<dyn Connector>,
    log: Arc<dyn ChatLog>,
    reconnect_delay: Duration,
    state: watch::Sender<ConnectionState>,
    /// Frame sender of the current attempt
    outbound: Mutex<Option<mpsc::UnboundedSender<String>>>,
    shutdown: watch::Sender<bool>,
}

impl ConnectionManager {
    pub fn new(
        connector: Arc<dyn Connector>,
        log: Arc<dyn ChatLog>,
        reconnect_delay: Duration,
    ) -> Self {
        Self {
            connector,
            log,
            reconnect_delay,
            state: watch::Sender::new(ConnectionState::Disconnected),
            outbound: Mutex::new(None),
            shutdown: watch::Sender::new(false),
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Connect and keep reconnecting until [`Self::close`] is called.
    pub async fn run(&self) {
        let mut shutdown = self.shutdown.subscribe();

        loop {
            if *shutdown.borrow() {
                break;
            }

            let (events_tx, mut events) = mpsc::unbounded_channel();
            self.state.send_replace(ConnectionState::Connecting);
            let outbound = self.connector.open(events_tx);
            *self.lock_outbound() = Some(outbound);

            let closed = tokio::select! {
                _ = self.dispatch(&mut events) => true,
                _ = shutdown_requested(&mut shutdown) => false,
            };
            if !closed {
                break;
            }

            tracing::info!("Reconnecting in {} ms", self.reconnect_delay.as_millis());
            tokio::select! {
                _ = tokio::time::sleep(self.reconnect_delay) => {}
                _ = shutdown_requested(&mut shutdown) => break,
            }
        }

        // Dropping the sender tells the transport to close the channel.
        self.lock_outbound().take();
        self.state.send_replace(ConnectionState::Disconnected);
        tracing::debug!("Connection manager stopped");
    }

    /// Stop [`Self::run`], closing the channel and cancelling a pending reconnect.
    pub fn close(&self) {
        self.shutdown.send_replace(true);
    }

    /// Send one chat message.
    ///
    /// Fails without rendering anything when the input is blank or the
    /// channel is not open.
    pub fn send(&self, raw: &str) -> Result<(), SendError> {
        let content = match MessageContent::new(raw) {
            Ok(content) => content,
            Err(_) => {
                tracing::debug!("Cannot send message: input is empty");
                return Err(SendError::EmptyMessage);
            }
        };

        let state = self.state();
        if state != ConnectionState::Open {
            tracing::warn!("Cannot send message: connection is {:?}", state);
            return Err(SendError::NotOpen);
        }

        let frame = serde_json::to_string(&OutgoingMessage::chat(content.as_str()))?;
        tracing::debug!("Sending message: {}", frame);
        {
            let outbound = self.lock_outbound();
            let sender = outbound.as_ref().ok_or(SendError::NotOpen)?;
            sender.send(frame).map_err(|_| SendError::NotOpen)?;
        }

        self.log.push(Speaker::You, content.as_str());
        Ok(())
    }

    /// Consume the events of one attempt until it is closed.
    async fn dispatch(&self, events: &mut mpsc::UnboundedReceiver<ConnectionEvent>) {
        while let Some(event) = events.recv().await {
            match event {
                ConnectionEvent::Opened => {
                    tracing::info!("Connected to server");
                    self.state.send_replace(ConnectionState::Open);
                    self.log.push(Speaker::System, "Connected to server");
                }
                ConnectionEvent::Frame(raw) => self.handle_frame(&raw),
                ConnectionEvent::Malformed(error) => self.reject_frame(&error),
                ConnectionEvent::Failed(error) => {
                    tracing::warn!("Connection error: {}", error);
                    self.log.push(Speaker::System, "Error connecting to server");
                }
                ConnectionEvent::Closed(reason) => {
                    self.handle_closed(reason);
                    return;
                }
            }
        }
        // The transport went away without reporting a closure.
        self.handle_closed(None);
    }

    fn handle_frame(&self, raw: &str) {
        match IncomingFrame::parse(raw) {
            Ok(IncomingFrame::Error(content)) => self.log.push(Speaker::Error, &content),
            Ok(IncomingFrame::Message(content)) => self.log.push(Speaker::Assistant, &content),
            Ok(IncomingFrame::ToolResponse(content)) => {
                self.log.push(Speaker::ToolResponse, &content)
            }
            Ok(IncomingFrame::Other(value)) => {
                tracing::debug!("Unrecognized frame: {}", value);
                self.log.push(Speaker::Assistant, &value.to_string());
            }
            Err(e) => self.reject_frame(&e.to_string()),
        }
    }

    fn reject_frame(&self, error: &str) {
        tracing::warn!("Error parsing message: {}", error);
        self.log.push(Speaker::Error, "Invalid response from server");
    }

    fn handle_closed(&self, reason: Option<String>) {
        self.lock_outbound().take();
        self.state.send_replace(ConnectionState::Disconnected);
        match reason {
            Some(reason) => tracing::info!("Disconnected from server: {}", reason),
            None => tracing::info!("Disconnected from server"),
        }
        self.log.push(Speaker::System, "Disconnected from server");
    }

    fn lock_outbound(&self) -> MutexGuard<'_, Option<mpsc::UnboundedSender<String>>> {
        self.outbound.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolves once [`ConnectionManager::close`] has been called.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    // The sender lives as long as the manager, so an error cannot happen
    // while `run` is borrowed from it.
    let _ = shutdown.wait_for(|closing| *closing).await;
}
