//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{ApiError, RosterError};

/// Errors of [`super::SendChatUseCase`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendChatError {
    /// Nothing but whitespace was typed; nothing is sent or rendered
    #[error("message is empty")]
    EmptyMessage,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors of [`super::ConnectServerUseCase`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectServerError {
    /// Name or URL field is blank
    #[error("server name and URL are required")]
    MissingFields,

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors of [`super::DisconnectServerUseCase`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisconnectServerError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors of [`super::LoadRosterUseCase`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadRosterError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
