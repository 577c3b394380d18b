//! UseCase: disconnect a roster row from its MCP server
//!
//! Nothing changes before the backend answers, so a failure leaves the row as
//! it was. The row itself is never removed.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    ChatLog, McpApi, Roster, RosterError, RowControl, ServerName, ServerStatus, Speaker,
};

use super::{
    error::DisconnectServerError,
    summary::{failure_notice, refresh_summary},
};

/// Disconnect use case
#[derive(Clone)]
pub struct DisconnectServerUseCase {
    api: Arc<dyn McpApi>,
    log: Arc<dyn ChatLog>,
    roster: Arc<Mutex<Roster>>,
}

impl DisconnectServerUseCase {
    pub fn new(api: Arc<dyn McpApi>, log: Arc<dyn ChatLog>, roster: Arc<Mutex<Roster>>) -> Self {
        Self { api, log, roster }
    }

    pub async fn execute(&self, row: usize) -> Result<(), DisconnectServerError> {
        let name = {
            let roster = self.roster.lock().await;
            let entry = roster.require_control(row, RowControl::Disconnect)?;
            ServerName::new(&entry.name).map_err(|_| RosterError::NameMissing(row))?
        };

        tracing::info!("Disconnecting from MCP server '{}'", name);
        match self.api.disconnect_server(name.clone()).await {
            Ok(()) => {
                self.roster
                    .lock()
                    .await
                    .set_status(row, ServerStatus::Disconnected)?;
                tracing::info!("Disconnected from MCP server '{}'", name);
                let _ = refresh_summary(self.api.as_ref(), self.log.as_ref()).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Disconnect from MCP server '{}' failed: {}", name, e);
                self.log
                    .push(Speaker::Error, &failure_notice("disconnect", &e));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ApiError, RowControl, api::MockMcpApi},
        ui::log::MemoryChatLog,
    };

    fn create_usecase(
        api: MockMcpApi,
        roster: Roster,
    ) -> (DisconnectServerUseCase, Arc<MemoryChatLog>, Arc<Mutex<Roster>>) {
        let log = Arc::new(MemoryChatLog::new());
        let roster = Arc::new(Mutex::new(roster));
        let usecase = DisconnectServerUseCase::new(Arc::new(api), log.clone(), roster.clone());
        (usecase, log, roster)
    }

    fn loaded_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add_connected("default_mcp");
        roster
    }

    #[tokio::test]
    async fn test_disconnect_success() {
        // テスト項目: 切断に成功すると行は残ったまま Disconnected になる
        // given (前提条件):
        let mut api = MockMcpApi::new();
        api.expect_disconnect_server()
            .withf(|name| name.as_str() == "default_mcp")
            .times(1)
            .returning(|_| Ok(()));
        api.expect_list_servers().times(1).returning(|| Ok(vec![]));
        let (usecase, log, roster) = create_usecase(api, loaded_roster());

        // when (操作):
        let result = usecase.execute(0).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        let roster = roster.lock().await;
        assert_eq!(roster.len(), 1);
        let entry = roster.get(0).unwrap();
        assert_eq!(entry.status, ServerStatus::Disconnected);
        assert_eq!(entry.control(), RowControl::Connect);
        assert_eq!(
            log.snapshot(),
            vec![(
                Speaker::System,
                "No MCP servers connected. Please add a server.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_disconnect_failure_leaves_row_untouched() {
        // テスト項目: 切断失敗時は行の状態が変わらずエラーが表示される
        // given (前提条件):
        let mut api = MockMcpApi::new();
        api.expect_disconnect_server()
            .returning(|_| Err(ApiError::Transport("connection reset".to_string())));
        api.expect_list_servers().times(0);
        let (usecase, log, roster) = create_usecase(api, loaded_roster());

        // when (操作):
        let result = usecase.execute(0).await;

        // then (期待する結果):
        assert!(matches!(result, Err(DisconnectServerError::Api(_))));
        let roster = roster.lock().await;
        assert_eq!(roster.get(0).unwrap().status, ServerStatus::Connected);
        assert_eq!(
            log.snapshot(),
            vec![(Speaker::Error, "Error: connection reset".to_string())]
        );
    }

    #[tokio::test]
    async fn test_disconnect_status_error_message() {
        // テスト項目: ステータスエラーでは理由がメッセージに含まれる
        // given (前提条件):
        let mut api = MockMcpApi::new();
        api.expect_disconnect_server().returning(|_| {
            Err(ApiError::Status {
                code: 500,
                reason: "Internal Server Error".to_string(),
            })
        });
        let (usecase, log, _roster) = create_usecase(api, loaded_roster());

        // when (操作):
        let _ = usecase.execute(0).await;

        // then (期待する結果):
        assert_eq!(
            log.snapshot(),
            vec![(
                Speaker::Error,
                "Error: Failed to disconnect: Internal Server Error".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_disconnect_unconnected_row_is_rejected() {
        // テスト項目: 未接続の行（追加直後）には切断リクエストを送らない
        // given (前提条件):
        let mut api = MockMcpApi::new();
        api.expect_disconnect_server().times(0);
        let mut roster = Roster::new();
        roster.add_blank();
        let (usecase, log, roster) = create_usecase(api, roster);

        // when (操作):
        let result = usecase.execute(0).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(DisconnectServerError::Roster(RosterError::NotConnected(0)))
        );
        assert_eq!(
            roster.lock().await.get(0).unwrap().status,
            ServerStatus::Disconnected
        );
        assert!(log.is_empty());
    }
}
