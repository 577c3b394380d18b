//! Roster summary notice shared by the roster use cases.

use crate::domain::{ApiError, ChatLog, McpApi, Speaker, entity::summary_notice};

/// Re-fetch the connected server names and render the summary notice.
///
/// Only the notice is refreshed; roster rows are left alone.
pub async fn refresh_summary(api: &dyn McpApi, log: &dyn ChatLog) -> Result<Vec<String>, ApiError> {
    match api.list_servers().await {
        Ok(servers) => {
            log.push(Speaker::System, &summary_notice(&servers));
            Ok(servers)
        }
        Err(e) => {
            tracing::warn!("Failed to refresh server list: {}", e);
            log.push(Speaker::Error, &format!("Error updating server list: {e}"));
            Err(e)
        }
    }
}

/// Error entry for a failed connect/disconnect call
pub(crate) fn failure_notice(action: &str, error: &ApiError) -> String {
    match error {
        ApiError::Status { reason, .. } => format!("Error: Failed to {action}: {reason}"),
        ApiError::Transport(description) => format!("Error: {description}"),
    }
}
