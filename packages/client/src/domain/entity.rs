//! Core domain models for the chat client.

use chrono::{DateTime, Local};
use mcp_chat_shared::time::now_local;

use super::error::RosterError;

/// URL prefilled in a newly added roster row
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/mcp";

/// Server name the backend connects to on its own at startup
pub const DEFAULT_SERVER_NAME: &str = "default_mcp";

/// URL shown for any other server reported by the backend
pub const SECONDARY_SERVER_URL: &str = "http://localhost:8002/mcp";

/// Who a chat log entry is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The local user
    You,
    Assistant,
    /// Output of an MCP tool invocation
    ToolResponse,
    /// Client-generated notices (connection state, roster summary)
    System,
    Error,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Assistant => "Assistant",
            Speaker::ToolResponse => "Tool Response",
            Speaker::System => "System",
            Speaker::Error => "Error",
        }
    }
}

/// One entry of the append-only chat log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub speaker: Speaker,
    /// Text exactly as received or typed (after trimming)
    pub content: String,
    pub at: DateTime<Local>,
}

impl LogEntry {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            at: now_local(),
        }
    }
}

/// Connection status of one roster row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Connected,
    Disconnected,
    Connecting,
    Failed,
}

impl ServerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServerStatus::Connected => "Connected",
            ServerStatus::Disconnected => "Disconnected",
            ServerStatus::Connecting => "Connecting...",
            ServerStatus::Failed => "Connection failed",
        }
    }
}

/// The action a row currently offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Connect,
    Disconnect,
}

impl RowControl {
    pub fn label(&self) -> &'static str {
        match self {
            RowControl::Connect => "Connect",
            RowControl::Disconnect => "Disconnect",
        }
    }
}

/// One row of the MCP server roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Raw name field; blank until the user fills it in
    pub name: String,
    /// Raw URL field
    pub url: String,
    pub status: ServerStatus,
    /// Rows materialized from the backend cannot be edited
    pub read_only: bool,
}

impl RosterEntry {
    /// A blank, editable row not yet known to the backend
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            url: DEFAULT_SERVER_URL.to_string(),
            status: ServerStatus::Disconnected,
            read_only: false,
        }
    }

    /// A read-only row for a server the backend reports as connected
    pub fn connected(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: default_url_for(name).to_string(),
            status: ServerStatus::Connected,
            read_only: true,
        }
    }

    /// Connected rows offer Disconnect, every other status offers Connect.
    pub fn control(&self) -> RowControl {
        match self.status {
            ServerStatus::Connected => RowControl::Disconnect,
            _ => RowControl::Connect,
        }
    }

    pub fn is_editable(&self) -> bool {
        !self.read_only && self.status != ServerStatus::Connected
    }
}

/// Ordered list of roster rows.
///
/// Rows are addressed by their 0-based position and never removed except by
/// [`Roster::clear`]. The same name may appear on several rows.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    rows: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row (placeholders before a load)
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Append a blank row and return its position
    pub fn add_blank(&mut self) -> usize {
        self.rows.push(RosterEntry::blank());
        self.rows.len() - 1
    }

    /// Append a connected, read-only row and return its position
    pub fn add_connected(&mut self, name: &str) -> usize {
        self.rows.push(RosterEntry::connected(name));
        self.rows.len() - 1
    }

    pub fn get(&self, row: usize) -> Result<&RosterEntry, RosterError> {
        self.rows.get(row).ok_or(RosterError::RowNotFound(row))
    }

    /// Row `row`, provided its status offers `action`.
    pub fn require_control(
        &self,
        row: usize,
        action: RowControl,
    ) -> Result<&RosterEntry, RosterError> {
        let entry = self.get(row)?;
        match (action, entry.control()) {
            (RowControl::Connect, RowControl::Disconnect) => {
                Err(RosterError::AlreadyConnected(row))
            }
            (RowControl::Disconnect, RowControl::Connect) => Err(RosterError::NotConnected(row)),
            _ => Ok(entry),
        }
    }

    pub fn set_status(&mut self, row: usize, status: ServerStatus) -> Result<(), RosterError> {
        let entry = self.rows.get_mut(row).ok_or(RosterError::RowNotFound(row))?;
        entry.status = status;
        Ok(())
    }

    /// Overwrite the name (and optionally the URL) of an editable row
    pub fn edit(&mut self, row: usize, name: &str, url: Option<&str>) -> Result<(), RosterError> {
        let entry = self.rows.get_mut(row).ok_or(RosterError::RowNotFound(row))?;
        if !entry.is_editable() {
            return Err(RosterError::RowReadOnly(row));
        }
        entry.name = name.to_string();
        if let Some(url) = url {
            entry.url = url.to_string();
        }
        Ok(())
    }

    pub fn rows(&self) -> &[RosterEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// URL displayed for a server reported by the backend
pub fn default_url_for(name: &str) -> &'static str {
    if name == DEFAULT_SERVER_NAME {
        DEFAULT_SERVER_URL
    } else {
        SECONDARY_SERVER_URL
    }
}

/// Summary notice for the backend-reported list of connected servers
pub fn summary_notice(servers: &[String]) -> String {
    if servers.is_empty() {
        "No MCP servers connected. Please add a server.".to_string()
    } else {
        format!(
            "Connected to {} MCP servers: {}",
            servers.len(),
            servers.join(", ")
        )
    }
}
