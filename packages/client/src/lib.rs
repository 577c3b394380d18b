//! Terminal chat client for an MCP chat backend.
//!
//! Two independent front-ends share this crate:
//!
//! - `ws` mode keeps one persistent WebSocket connection, sends typed
//!   messages as JSON envelopes and reconnects on loss.
//! - `http` mode sends one request per message and manages the roster of MCP
//!   servers the backend is connected to.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use config::{Cli, Mode};
use error::ClientError;

/// Run the client in the mode selected on the command line
pub async fn run_client(cli: Cli) -> Result<(), ClientError> {
    match cli.mode {
        Mode::Ws(config) => ui::run_ws_chat(config).await,
        Mode::Http(config) => ui::run_http_chat(config).await,
    }
}
