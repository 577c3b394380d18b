//! UseCase: connect a roster row to its MCP server
//!
//! The row goes Connecting → Connected on success, Connecting → Failed on any
//! failure. A success also refreshes the summary notice (not the rows).
//! Overlapping calls on the same row are not coordinated: the last response
//! to arrive wins.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    ChatLog, McpApi, Roster, RowControl, ServerName, ServerStatus, ServerUrl, Speaker,
};

use super::{
    error::ConnectServerError,
    summary::{failure_notice, refresh_summary},
};

/// Connect use case
#[derive(Clone)]
pub struct ConnectServerUseCase {
    api: Arc<dyn McpApi>,
    log: Arc<dyn ChatLog>,
    roster: Arc<Mutex<Roster>>,
}

impl ConnectServerUseCase {
    pub fn new(api: Arc<dyn McpApi>, log: Arc<dyn ChatLog>, roster: Arc<Mutex<Roster>>) -> Self {
        Self { api, log, roster }
    }

    /// Connect the server described by row `row`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the backend accepted the connection
    /// * `Err(ConnectServerError::Roster)` - no such row, or the row is already connected
    /// * `Err(ConnectServerError::MissingFields)` - name or URL blank; no call was made
    /// * `Err(ConnectServerError::Api)` - the call failed; the row is marked failed
    pub async fn execute(&self, row: usize) -> Result<(), ConnectServerError> {
        let (raw_name, raw_url) = {
            let roster = self.roster.lock().await;
            let entry = roster.require_control(row, RowControl::Connect)?;
            (entry.name.clone(), entry.url.clone())
        };

        let (name, url) = match (ServerName::new(&raw_name), ServerUrl::new(&raw_url)) {
            (Ok(name), Ok(url)) => (name, url),
            _ => {
                self.log
                    .push(Speaker::Error, "Please enter both server name and URL");
                return Err(ConnectServerError::MissingFields);
            }
        };

        self.roster
            .lock()
            .await
            .set_status(row, ServerStatus::Connecting)?;
        tracing::info!("Connecting to MCP server '{}' at {}", name, url);

        match self.api.connect_server(name.clone(), url).await {
            Ok(()) => {
                self.roster
                    .lock()
                    .await
                    .set_status(row, ServerStatus::Connected)?;
                tracing::info!("Connected to MCP server '{}'", name);
                // A failed refresh is already rendered; the connect itself succeeded.
                let _ = refresh_summary(self.api.as_ref(), self.log.as_ref()).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Connection to MCP server '{}' failed: {}", name, e);
                self.roster
                    .lock()
                    .await
                    .set_status(row, ServerStatus::Failed)?;
                self.log.push(Speaker::Error, &failure_notice("connect", &e));
                Err(e.into())
            }
        }
    }
}
