use chrono::{DateTime, Local};

/// Current wall-clock time in the local timezone
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Format a timestamp as `HH:MM:SS` for the chat log
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}
