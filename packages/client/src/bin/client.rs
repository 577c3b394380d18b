//! Terminal chat client for an MCP chat backend.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin mcp-chat -- ws
//! cargo run --bin mcp-chat -- http --base-url http://localhost:8001
//! ```

use clap::Parser;
use mcp_chat_client::config::Cli;
use mcp_chat_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    // Run the client
    if let Err(e) = mcp_chat_client::run_client(cli).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
