//! Line input from the terminal.

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::{mpsc, oneshot};

use crate::error::ClientError;

const PROMPT: &str = "> ";

/// Read lines on a dedicated thread and forward them to the async side.
///
/// The channel closes on Ctrl-C, Ctrl-D or a terminal error. The thread is
/// not joined: it may still be blocked in `readline` when the client exits.
pub async fn spawn_line_reader() -> Result<mpsc::UnboundedReceiver<String>, ClientError> {
    let (lines_tx, lines_rx) = mpsc::unbounded_channel();
    let (ready_tx, ready_rx) = oneshot::channel::<Result<(), String>>();

    std::thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            let mut editor = match DefaultEditor::new() {
                Ok(editor) => editor,
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));

            loop {
                match editor.readline(PROMPT) {
                    Ok(line) => {
                        let _ = editor.add_history_entry(line.as_str());
                        if lines_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
        })?;

    match ready_rx.await {
        Ok(Ok(())) => Ok(lines_rx),
        Ok(Err(e)) => Err(ClientError::Terminal(e)),
        Err(_) => Err(ClientError::Terminal(
            "line reader exited during startup".to_string(),
        )),
    }
}
