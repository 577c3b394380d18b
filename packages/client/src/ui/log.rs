//! Chat log renderers.

use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use mcp_chat_shared::time::format_clock;

use crate::domain::{ChatLog, LogEntry, Speaker};

/// Prints every entry to stdout as it is appended.
#[derive(Debug, Default)]
pub struct TerminalChatLog;

impl TerminalChatLog {
    pub fn new() -> Self {
        Self
    }
}

/// One display line for an entry
pub fn format_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {}: {}",
        format_clock(&entry.at),
        entry.speaker.label(),
        entry.content
    )
}

impl ChatLog for TerminalChatLog {
    fn append(&self, entry: LogEntry) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", format_entry(&entry));
        let _ = stdout.flush();
    }
}

/// Keeps entries in memory; used to observe the client without a terminal.
#[derive(Debug, Default)]
pub struct MemoryChatLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Speaker and content of every entry, in append order
    pub fn snapshot(&self) -> Vec<(Speaker, String)> {
        self.entries()
            .into_iter()
            .map(|entry| (entry.speaker, entry.content))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChatLog for MemoryChatLog {
    fn append(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}
