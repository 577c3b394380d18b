//! Wire formats exchanged with the backend.

pub mod http;
pub mod websocket;
