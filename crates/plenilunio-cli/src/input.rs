//! Stdin line protocol for `plenilunio run`.

use plenilunio_runtime::{InputEvent, Key};
use plenilunio_types::SeasonId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Parse one input line.
///
/// - `<id>`: pointer activation of that season's control
/// - `key <id> <key>`: key press on that control
/// - `quit` / `q` / `exit`: end of input
///
/// Blank lines and anything unrecognized yield `None`.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let mut words = line.split_whitespace();
    let first = words.next()?;

    match first {
        "quit" | "q" | "exit" => Some(InputEvent::Quit),
        "key" => {
            let control = SeasonId::from(words.next()?);
            let key = Key::parse(words.next()?);
            Some(InputEvent::Key { control, key })
        }
        id if words.next().is_none() => Some(InputEvent::Pointer {
            control: SeasonId::from(id),
        }),
        _ => None,
    }
}

/// Forward stdin lines as input events until EOF, `quit`, or the receiver
/// goes away. Dropping the sender on exit signals end of input.
pub fn spawn_stdin_reader(tx: Sender<InputEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("stdin closed");
                    break;
                }
                Err(err) => {
                    warn!(error = %err, "failed to read stdin");
                    break;
                }
            };

            let Some(event) = parse_line(&line) else {
                if !line.trim().is_empty() {
                    warn!(input = %line.trim(), "unrecognized input");
                }
                continue;
            };

            let quit = event == InputEvent::Quit;
            if tx.send(event).await.is_err() || quit {
                break;
            }
        }
    })
}
