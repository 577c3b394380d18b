//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is applied to the
/// binary and to the workspace crates. Output goes to stderr so it never
/// interleaves with the chat log printed on stdout.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
    tracing::debug!("Logger initialized for {}", bin_name);
}

fn default_directives(bin_name: &str, level: &str) -> String {
    let bin = bin_name.replace('-', "_");
    format!("warn,{bin}={level},mcp_chat_client={level},mcp_chat_shared={level}")
}
