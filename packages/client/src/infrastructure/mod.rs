//! Infrastructure layer: concrete transports behind the domain seams.

pub mod api;
pub mod dto;
pub mod websocket;

pub use api::HttpMcpApi;
pub use websocket::WebSocketConnector;
