//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// MessageContent validation error
    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    /// ServerName validation error
    #[error("ServerName cannot be empty")]
    ServerNameEmpty,

    /// ServerUrl validation error
    #[error("ServerUrl cannot be empty")]
    ServerUrlEmpty,
}

/// Errors related to Roster domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No row at the given 0-based position (displayed 1-based)
    #[error("No server row {}", .0 + 1)]
    RowNotFound(usize),

    /// The row's fields cannot be edited (loaded from the backend or connected)
    #[error("Server row {} is read-only", .0 + 1)]
    RowReadOnly(usize),

    /// Connect requested on a row whose action is Disconnect
    #[error("Server row {} is already connected", .0 + 1)]
    AlreadyConnected(usize),

    /// Disconnect requested on a row whose action is Connect
    #[error("Server row {} is not connected", .0 + 1)]
    NotConnected(usize),

    /// A connected row without a usable server name
    #[error("Server row {} has no server name", .0 + 1)]
    NameMissing(usize),
}

/// Errors returned by the backend API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("HTTP error! status: {code}")]
    Status { code: u16, reason: String },

    /// The request never produced a response (unreachable backend, bad body, ...)
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Human readable reason: the status text for status errors, the failure
    /// description otherwise.
    pub fn reason(&self) -> &str {
        match self {
            ApiError::Status { reason, .. } => reason,
            ApiError::Transport(description) => description,
        }
    }
}
