//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequestDto {
    pub message: String,
    /// Target MCP server; omitted to let the backend pick
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

/// Reply of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponseDto {
    pub response: String,
}

/// Body of `POST /api/connect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectRequestDto {
    pub server_name: String,
    pub server_url: String,
}

/// Body of `POST /api/disconnect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisconnectRequestDto {
    pub server_name: String,
}

/// Reply of `GET /api/servers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerListDto {
    pub servers: Vec<String>,
}
