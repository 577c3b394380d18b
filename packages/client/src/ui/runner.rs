//! Interactive sessions for the two client modes.

use std::sync::Arc;

use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    config::{HttpConfig, WsConfig},
    domain::{ChatLog, McpApi, Roster, RowControl, ServerName, Speaker},
    error::ClientError,
    infrastructure::{HttpMcpApi, WebSocketConnector},
    usecase::{
        AddServerUseCase, ConnectServerError, ConnectServerUseCase, DisconnectServerError,
        DisconnectServerUseCase, LoadRosterError, LoadRosterUseCase, SendChatUseCase,
    },
};

use super::{
    command::{self, Command, HELP},
    connection::ConnectionManager,
    input::spawn_line_reader,
    log::TerminalChatLog,
    roster_view::render_roster,
};

/// Persistent-connection chat until `/quit` or end of input.
pub async fn run_ws_chat(config: WsConfig) -> Result<(), ClientError> {
    tracing::info!("Starting WebSocket chat against {}", config.url);
    let log: Arc<dyn ChatLog> = Arc::new(TerminalChatLog::new());
    let manager = Arc::new(ConnectionManager::new(
        Arc::new(WebSocketConnector::new(config.url.as_str())),
        log.clone(),
        config.reconnect_delay(),
    ));

    let connection_task = tokio::spawn({
        let manager = manager.clone();
        async move { manager.run().await }
    });

    let mut lines = spawn_line_reader().await?;
    while let Some(line) = lines.recv().await {
        match command::parse(&line) {
            Ok(Command::Chat(text)) => {
                if let Err(e) = manager.send(&text) {
                    tracing::debug!("Message not sent: {}", e);
                }
            }
            Ok(Command::Help) => println!("Type a message and press Enter. /quit exits."),
            Ok(Command::Quit) => break,
            Ok(_) => log.push(
                Speaker::System,
                "Server commands are only available in http mode",
            ),
            Err(e) => log.push(Speaker::Error, &e.to_string()),
        }
    }

    manager.close();
    connection_task.await?;
    Ok(())
}

/// Request/response chat plus roster management until `/quit` or end of input.
pub async fn run_http_chat(config: HttpConfig) -> Result<(), ClientError> {
    tracing::info!("Starting HTTP chat against {}", config.base_url);
    let api: Arc<dyn McpApi> = Arc::new(HttpMcpApi::new(&config.base_url)?);
    let log: Arc<dyn ChatLog> = Arc::new(TerminalChatLog::new());
    let mut session = HttpChatSession::new(api, log);

    // Failures are rendered; the session is usable without a roster.
    let _ = session.load().await;
    session.print_roster().await;
    println!("{HELP}");

    let mut lines = spawn_line_reader().await?;
    while let Some(line) = lines.recv().await {
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                session.handle(command).await;
            }
            Err(e) => session.log.push(Speaker::Error, &e.to_string()),
        }
    }

    Ok(())
}

/// State of one request/response session: the roster, the chat target and
/// the use cases operating on them.
pub struct HttpChatSession {
    log: Arc<dyn ChatLog>,
    roster: Arc<Mutex<Roster>>,
    target: Option<ServerName>,
    send_chat: SendChatUseCase,
    load_roster: LoadRosterUseCase,
    add_server: AddServerUseCase,
    connect_server: ConnectServerUseCase,
    disconnect_server: DisconnectServerUseCase,
}

impl HttpChatSession {
    pub fn new(api: Arc<dyn McpApi>, log: Arc<dyn ChatLog>) -> Self {
        let roster = Arc::new(Mutex::new(Roster::new()));
        Self {
            send_chat: SendChatUseCase::new(api.clone(), log.clone()),
            load_roster: LoadRosterUseCase::new(api.clone(), log.clone(), roster.clone()),
            add_server: AddServerUseCase::new(roster.clone()),
            connect_server: ConnectServerUseCase::new(api.clone(), log.clone(), roster.clone()),
            disconnect_server: DisconnectServerUseCase::new(api, log.clone(), roster.clone()),
            log,
            roster,
            target: None,
        }
    }

    pub fn roster(&self) -> Arc<Mutex<Roster>> {
        self.roster.clone()
    }

    pub fn target(&self) -> Option<&ServerName> {
        self.target.as_ref()
    }

    /// Materialize the roster from the backend
    pub async fn load(&self) -> Result<Vec<String>, LoadRosterError> {
        self.load_roster.execute().await
    }

    pub async fn print_roster(&self) {
        let roster = self.roster.lock().await;
        for line in render_roster(&roster) {
            println!("{line}");
        }
    }

    /// Handle one command.
    ///
    /// Network calls run as independent tasks; the returned handle (if any)
    /// completes when the call's effect has been rendered.
    pub async fn handle(&mut self, command: Command) -> Option<JoinHandle<()>> {
        match command {
            Command::Chat(text) => {
                // Rendered right away; the reply follows whenever it arrives.
                let content = match self.send_chat.prepare(&text) {
                    Ok(content) => content,
                    Err(_) => return None,
                };
                let usecase = self.send_chat.clone();
                let target = self.target.clone();
                Some(tokio::spawn(async move {
                    let _ = usecase.deliver(content, target).await;
                }))
            }
            Command::AddServer => {
                let row = self.add_server.execute().await;
                println!("Added server row {}", row + 1);
                None
            }
            Command::EditServer { row, name, url } => {
                let result = self.roster.lock().await.edit(row, &name, url.as_deref());
                if let Err(e) = result {
                    self.log.push(Speaker::Error, &e.to_string());
                }
                None
            }
            Command::Connect(row) => Some(self.spawn_connect(row)),
            Command::Disconnect(row) => Some(self.spawn_disconnect(row)),
            Command::Toggle(row) => {
                let control = self.roster.lock().await.get(row).map(|entry| entry.control());
                match control {
                    Ok(RowControl::Connect) => Some(self.spawn_connect(row)),
                    Ok(RowControl::Disconnect) => Some(self.spawn_disconnect(row)),
                    Err(e) => {
                        self.log.push(Speaker::Error, &e.to_string());
                        None
                    }
                }
            }
            Command::Servers => {
                self.print_roster().await;
                None
            }
            Command::Use(name) => {
                self.target = name.and_then(|name| ServerName::new(&name).ok());
                let notice = match &self.target {
                    Some(name) => format!("Chat messages now go to MCP server '{name}'"),
                    None => "Chat messages now go to the backend default".to_string(),
                };
                self.log.push(Speaker::System, &notice);
                None
            }
            Command::Help => {
                println!("{HELP}");
                None
            }
            Command::Quit => None,
        }
    }

    fn spawn_connect(&self, row: usize) -> JoinHandle<()> {
        let usecase = self.connect_server.clone();
        let log = self.log.clone();
        tokio::spawn(async move {
            if let Err(ConnectServerError::Roster(e)) = usecase.execute(row).await {
                log.push(Speaker::Error, &e.to_string());
            }
        })
    }

    fn spawn_disconnect(&self, row: usize) -> JoinHandle<()> {
        let usecase = self.disconnect_server.clone();
        let log = self.log.clone();
        tokio::spawn(async move {
            if let Err(DisconnectServerError::Roster(e)) = usecase.execute(row).await {
                log.push(Speaker::Error, &e.to_string());
            }
        })
    }
}
