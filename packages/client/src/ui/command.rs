//! REPL input parsing.
//!
//! Lines starting with `/` are commands; everything else is a chat message.
//! A leading `//` sends a message that starts with `/`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Chat text, untrimmed
    Chat(String),
    Help,
    Quit,
    /// Print the roster
    Servers,
    /// Append a blank roster row
    AddServer,
    /// Fill in a blank row; rows are 0-based
    EditServer {
        row: usize,
        name: String,
        url: Option<String>,
    },
    Connect(usize),
    Disconnect(usize),
    /// Run the row's current control
    Toggle(usize),
    /// Select (or clear) the MCP server that answers chat messages
    Use(Option<String>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0} (type /help)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid row number: {0}")]
    InvalidRow(String),
}

pub const HELP: &str = "\
Commands:
  /servers                    show the MCP server roster
  /add                        add a blank server row
  /edit <row> <name> [url]    fill in a blank server row
  /connect <row>              connect a row
  /disconnect <row>           disconnect a row
  /toggle <row>               connect or disconnect, whichever the row offers
  /use [name]                 send chat messages to an MCP server (no name: backend default)
  /help                       show this help
  /quit                       exit
Anything else is sent as a chat message.";

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(Command::Chat(line.to_string()));
    };
    if rest.starts_with('/') {
        return Ok(Command::Chat(rest.to_string()));
    }

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match name {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "servers" | "list" => Command::Servers,
        "add" => Command::AddServer,
        "edit" => match args.as_slice() {
            [row, name] => Command::EditServer {
                row: parse_row(row)?,
                name: name.to_string(),
                url: None,
            },
            [row, name, url] => Command::EditServer {
                row: parse_row(row)?,
                name: name.to_string(),
                url: Some(url.to_string()),
            },
            _ => return Err(CommandError::Usage("/edit <row> <name> [url]")),
        },
        "connect" => Command::Connect(single_row(&args, "/connect <row>")?),
        "disconnect" => Command::Disconnect(single_row(&args, "/disconnect <row>")?),
        "toggle" => Command::Toggle(single_row(&args, "/toggle <row>")?),
        "use" => match args.as_slice() {
            [] => Command::Use(None),
            [name] => Command::Use(Some(name.to_string())),
            _ => return Err(CommandError::Usage("/use [name]")),
        },
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn single_row(args: &[&str], usage: &'static str) -> Result<usize, CommandError> {
    match args {
        [row] => parse_row(row),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// 1-based row number as typed → 0-based position
fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidRow(raw.to_string())),
    }
}
