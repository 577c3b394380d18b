//! UseCase 層
//!
//! クライアントの操作を実装するレイヤー。
//! UI 層から呼び出され、Domain 層のモデルと境界 trait を操作します。

pub mod add_server;
pub mod connect_server;
pub mod disconnect_server;
pub mod error;
pub mod load_roster;
pub mod send_chat;
pub mod summary;

pub use add_server::AddServerUseCase;
pub use connect_server::ConnectServerUseCase;
pub use disconnect_server::DisconnectServerUseCase;
pub use error::{ConnectServerError, DisconnectServerError, LoadRosterError, SendChatError};
pub use load_roster::LoadRosterUseCase;
pub use send_chat::SendChatUseCase;
pub use summary::refresh_summary;
