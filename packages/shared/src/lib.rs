//! Shared utilities for the MCP chat client binaries.

pub mod logger;
pub mod time;
