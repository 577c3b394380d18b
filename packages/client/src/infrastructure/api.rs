//! HTTP implementation of the backend API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::{ApiError, McpApi, MessageContent, ServerName, ServerUrl};

use super::dto::http::{
    ChatRequestDto, ChatResponseDto, ConnectRequestDto, DisconnectRequestDto, ServerListDto,
};

/// `McpApi` over the backend's JSON endpoints.
#[derive(Clone)]
pub struct HttpMcpApi {
    client: Client,
    base_url: String,
}

impl HttpMcpApi {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8001`).
    ///
    /// No request timeout is set: a chat call lasts as long as the backend
    /// takes to answer.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        check_status(response)?
            .json::<T>()
            .await
            .map_err(transport_error)
    }
}

/// Any non-2xx status is a failure, whatever the body says.
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!("Backend answered {} for {}", status, response.url());
    Err(ApiError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

fn transport_error(e: reqwest::Error) -> ApiError {
    tracing::warn!("Backend request failed: {}", e);
    ApiError::Transport(e.to_string())
}

#[async_trait]
impl McpApi for HttpMcpApi {
    async fn chat(
        &self,
        message: MessageContent,
        server: Option<ServerName>,
    ) -> Result<String, ApiError> {
        let body = ChatRequestDto {
            message: message.into_string(),
            server: server.map(ServerName::into_string),
        };
        let reply: ChatResponseDto = self
            .post("/api/chat", &body)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        Ok(reply.response)
    }

    async fn connect_server(&self, name: ServerName, url: ServerUrl) -> Result<(), ApiError> {
        let body = ConnectRequestDto {
            server_name: name.into_string(),
            server_url: url.into_string(),
        };
        // Only the status matters; the body is not read.
        self.post("/api/connect", &body).await?;
        Ok(())
    }

    async fn disconnect_server(&self, name: ServerName) -> Result<(), ApiError> {
        let body = DisconnectRequestDto {
            server_name: name.into_string(),
        };
        self.post("/api/disconnect", &body).await?;
        Ok(())
    }

    async fn list_servers(&self) -> Result<Vec<String>, ApiError> {
        let list: ServerListDto = self.get_json("/api/servers").await?;
        Ok(list.servers)
    }
}
