//! Persistent connection abstraction.

use tokio::sync::mpsc;

/// Lifecycle events of one connection attempt, in transport order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// The backend accepted the channel
    Opened,
    /// One text frame pushed by the backend
    Frame(String),
    /// A frame that is not valid text, with the decoding error
    Malformed(String),
    /// Transport-level error; always followed by `Closed`
    Failed(String),
    /// The channel is gone, with the close reason if one was given
    Closed(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Open,
}

/// Opens connection attempts.
pub trait Connector: Send + Sync {
    /// Start a new attempt.
    ///
    /// Events of this attempt are delivered on `events`; dropping that sender
    /// counts as a closure. Text frames written to the returned sender are
    /// transmitted while the channel is open, and dropping it closes the
    /// channel.
    fn open(&self, events: mpsc::UnboundedSender<ConnectionEvent>) -> mpsc::UnboundedSender<String>;
}
