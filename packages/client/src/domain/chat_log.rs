//! Observer for rendered chat log entries.

use super::entity::{LogEntry, Speaker};

/// Append-only sink the client renders into.
///
/// Entries are never edited or removed once appended.
pub trait ChatLog: Send + Sync {
    fn append(&self, entry: LogEntry);

    fn push(&self, speaker: Speaker, content: &str) {
        self.append(LogEntry::new(speaker, content));
    }
}
