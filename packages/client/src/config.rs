//! Command line configuration.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

/// Address of the backend's persistent chat endpoint
pub const DEFAULT_WS_URL: &str = "ws://localhost:8001/ws";

/// Base URL of the backend's HTTP API
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Parser)]
#[command(name = "mcp-chat", version, about = "Terminal chat client for an MCP chat backend")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Chat over one persistent WebSocket connection
    Ws(WsConfig),
    /// Chat over HTTP and manage the MCP server roster
    Http(HttpConfig),
}

#[derive(Debug, Clone, Args)]
pub struct WsConfig {
    /// WebSocket endpoint
    #[arg(long, default_value = DEFAULT_WS_URL)]
    pub url: String,

    /// Seconds to wait after a disconnect before reconnecting
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub reconnect_delay_secs: u64,
}

impl WsConfig {
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs)
    }
}

#[derive(Debug, Clone, Args)]
pub struct HttpConfig {
    /// Backend base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub base_url: String,
}
