//! UseCase: materialize the roster from the backend
//!
//! Runs once when the request/response client starts. Placeholder rows are
//! dropped first, then every server the backend reports becomes one connected,
//! read-only row, followed by a single summary notice.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ChatLog, McpApi, Roster, Speaker, entity::summary_notice};

use super::error::LoadRosterError;

/// Roster load use case
#[derive(Clone)]
pub struct LoadRosterUseCase {
    api: Arc<dyn McpApi>,
    log: Arc<dyn ChatLog>,
    roster: Arc<Mutex<Roster>>,
}

impl LoadRosterUseCase {
    pub fn new(api: Arc<dyn McpApi>, log: Arc<dyn ChatLog>, roster: Arc<Mutex<Roster>>) -> Self {
        Self { api, log, roster }
    }

    /// Load the roster.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - the reported server names
    /// * `Err(LoadRosterError)` - the list could not be fetched; the roster is
    ///   left empty and an error entry is rendered
    pub async fn execute(&self) -> Result<Vec<String>, LoadRosterError> {
        self.roster.lock().await.clear();

        let servers = match self.api.list_servers().await {
            Ok(servers) => servers,
            Err(e) => {
                tracing::warn!("Failed to load server list: {}", e);
                self.log
                    .push(Speaker::Error, &format!("Error loading server list: {e}"));
                return Err(e.into());
            }
        };

        {
            let mut roster = self.roster.lock().await;
            for name in &servers {
                roster.add_connected(name);
            }
        }
        tracing::info!("Loaded {} connected server(s)", servers.len());

        self.log.push(Speaker::System, &summary_notice(&servers));
        Ok(servers)
    }
}
