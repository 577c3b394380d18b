//! UseCase: add a blank roster row

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::Roster;

/// Appends an editable row with an empty name and the default URL.
///
/// Purely local: the backend learns about the server only on connect.
#[derive(Clone)]
pub struct AddServerUseCase {
    roster: Arc<Mutex<Roster>>,
}

impl AddServerUseCase {
    pub fn new(roster: Arc<Mutex<Roster>>) -> Self {
        Self { roster }
    }

    /// Returns the position of the new row
    pub async fn execute(&self) -> usize {
        let row = self.roster.lock().await.add_blank();
        tracing::debug!("Added blank server row {}", row);
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ServerStatus, entity::DEFAULT_SERVER_URL};

    #[tokio::test]
    async fn test_add_server_appends_blank_row() {
        // テスト項目: 空の行が末尾に追加される
        // given (前提条件):
        let roster = Arc::new(Mutex::new(Roster::new()));
        roster.lock().await.add_connected("default_mcp");
        let usecase = AddServerUseCase::new(roster.clone());

        // when (操作):
        let row = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(row, 1);
        let roster = roster.lock().await;
        let entry = roster.get(row).unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.url, DEFAULT_SERVER_URL);
        assert_eq!(entry.status, ServerStatus::Disconnected);
    }
}
