//! UseCase: request/response chat
//!
//! One user message becomes one backend call and exactly one rendered reply
//! or error. Calls are independent: several may be in flight and replies are
//! rendered in completion order.

use std::sync::Arc;

use crate::domain::{ChatLog, McpApi, MessageContent, ServerName, Speaker};

use super::error::SendChatError;

/// Request/response chat use case
#[derive(Clone)]
pub struct SendChatUseCase {
    api: Arc<dyn McpApi>,
    log: Arc<dyn ChatLog>,
}

impl SendChatUseCase {
    pub fn new(api: Arc<dyn McpApi>, log: Arc<dyn ChatLog>) -> Self {
        Self { api, log }
    }

    /// Validate the input and render it as the user's message.
    ///
    /// Blank input is rejected without rendering anything.
    pub fn prepare(&self, raw: &str) -> Result<MessageContent, SendChatError> {
        let content = MessageContent::new(raw).map_err(|_| SendChatError::EmptyMessage)?;
        self.log.push(Speaker::You, content.as_str());
        Ok(content)
    }

    /// Send a prepared message and render the reply or the failure.
    pub async fn deliver(
        &self,
        content: MessageContent,
        server: Option<ServerName>,
    ) -> Result<String, SendChatError> {
        match self.api.chat(content, server).await {
            Ok(reply) => {
                self.log.push(Speaker::Assistant, &reply);
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                self.log
                    .push(Speaker::Error, &format!("Error sending message: {e}"));
                Err(e.into())
            }
        }
    }

    /// [`Self::prepare`] followed by [`Self::deliver`]
    pub async fn execute(
        &self,
        raw: &str,
        server: Option<ServerName>,
    ) -> Result<String, SendChatError> {
        let content = self.prepare(raw)?;
        self.deliver(content, server).await
    }
}
