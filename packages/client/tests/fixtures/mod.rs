//! In-process fake of the chat backend.
//!
//! Serves the HTTP API (`/api/chat`, `/api/connect`, `/api/disconnect`,
//! `/api/servers`) and the `/ws` endpoint on an ephemeral port.
//!
//! `/ws` behavior: sends `{"type":"message","content":"welcome"}` on connect,
//! answers each chat envelope with a `tool_response` echo, answers the
//! content `garbage` with a non-JSON frame and closes the socket on `bye`.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

#[derive(Default)]
pub struct BackendState {
    pub servers: Mutex<Vec<String>>,
    pub fail_chat: AtomicBool,
    pub chat_requests: Mutex<Vec<Value>>,
    pub ws_connections: AtomicUsize,
    pub ws_frames: Mutex<Vec<Value>>,
}

pub struct FakeBackend {
    addr: SocketAddr,
    pub state: Arc<BackendState>,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start(servers: &[&str]) -> Self {
        let state = Arc::new(BackendState::default());
        *state.servers.lock().unwrap() = servers.iter().map(|s| s.to_string()).collect();

        let app = Router::new()
            .route("/api/chat", post(chat))
            .route("/api/connect", post(connect))
            .route("/api/disconnect", post(disconnect))
            .route("/api/servers", get(list_servers))
            .route("/ws", get(ws_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend failed");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address nothing listens on
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Poll `condition` until it holds or `timeout` elapses
pub async fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

async fn chat(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    state.chat_requests.lock().unwrap().push(body.clone());
    if state.fail_chat.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let message = body["message"].as_str().unwrap_or_default();
    Ok(Json(json!({ "response": format!("echo: {message}") })))
}

async fn connect(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let name = body["server_name"].as_str().unwrap_or_default().to_string();
    let url = body["server_url"].as_str().unwrap_or_default();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(StatusCode::BAD_REQUEST);
    }
    state.servers.lock().unwrap().push(name.clone());
    Ok(Json(json!({ "status": "connected", "server_name": name })))
}

async fn disconnect(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let name = body["server_name"].as_str().unwrap_or_default().to_string();
    state.servers.lock().unwrap().retain(|s| s != &name);
    Json(json!({ "status": "disconnected", "server_name": name }))
}

async fn list_servers(State(state): State<Arc<BackendState>>) -> Json<Value> {
    let servers = state.servers.lock().unwrap().clone();
    Json(json!({ "servers": servers }))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<BackendState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<BackendState>) {
    state.ws_connections.fetch_add(1, Ordering::SeqCst);
    let welcome = json!({ "type": "message", "content": "welcome" }).to_string();
    if socket.send(Message::Text(welcome.into())).await.is_err() {
        return;
    }

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                let value: Value = serde_json::from_str(text.as_str()).unwrap_or(Value::Null);
                let content = value["content"].as_str().unwrap_or_default().to_string();
                state.ws_frames.lock().unwrap().push(value);

                if content == "bye" {
                    let _ = socket.send(Message::Close(None)).await;
                    break;
                }
                if content == "binary" {
                    let bytes: Vec<u8> = vec![0xff, 0xfe, b'{'];
                    if socket.send(Message::Binary(bytes.into())).await.is_err() {
                        break;
                    }
                    continue;
                }
                let reply = if content == "garbage" {
                    "not json".to_string()
                } else {
                    json!({ "type": "tool_response", "content": format!("echo: {content}") })
                        .to_string()
                };
                if socket.send(Message::Text(reply.into())).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}
