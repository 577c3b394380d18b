//! Domain layer for the chat client.
//!
//! This module contains the client's models and the seams to the outside
//! world (backend API, persistent connection, chat log rendering), independent
//! of any transport or terminal concerns.

pub mod api;
pub mod chat_log;
pub mod connection;
pub mod entity;
pub mod error;
pub mod value_object;

pub use api::McpApi;
pub use chat_log::ChatLog;
pub use connection::{ConnectionEvent, ConnectionState, Connector};
pub use entity::{LogEntry, Roster, RosterEntry, RowControl, ServerStatus, Speaker};
pub use error::{ApiError, RosterError, ValueObjectError};
pub use value_object::{MessageContent, ServerName, ServerUrl};
