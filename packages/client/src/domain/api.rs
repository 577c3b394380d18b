//! Backend API abstraction.
//!
//! The request/response client and the roster use cases only talk to the
//! backend through this trait; `infrastructure::api::HttpMcpApi` is the real
//! implementation.

use async_trait::async_trait;

use super::{
    error::ApiError,
    value_object::{MessageContent, ServerName, ServerUrl},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait McpApi: Send + Sync {
    /// Send one chat message and return the reply text.
    ///
    /// `server` selects the MCP server that answers; `None` leaves the choice
    /// to the backend.
    async fn chat(
        &self,
        message: MessageContent,
        server: Option<ServerName>,
    ) -> Result<String, ApiError>;

    /// Ask the backend to connect to an MCP server
    async fn connect_server(&self, name: ServerName, url: ServerUrl) -> Result<(), ApiError>;

    /// Ask the backend to drop an MCP server connection
    async fn disconnect_server(&self, name: ServerName) -> Result<(), ApiError>;

    /// Names of the servers the backend is currently connected to
    async fn list_servers(&self) -> Result<Vec<String>, ApiError>;
}
