//! Terminal UI: chat log rendering, the persistent connection manager and
//! the interactive sessions.

pub mod command;
pub mod connection;
pub mod input;
pub mod log;
pub mod roster_view;
pub mod runner;

pub use connection::{ConnectionManager, DEFAULT_RECONNECT_DELAY, SendError};
pub use runner::{HttpChatSession, run_http_chat, run_ws_chat};
