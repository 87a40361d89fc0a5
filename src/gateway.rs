//! Console gateway.
//!
//! A line-oriented stand-in for a real chat transport: each stdin line
//! becomes a message event from a synthetic console author, dispatched
//! serially. One message's dispatch fully completes before the next line
//! is read, matching the single-flight-per-message model.

use crate::dispatch::{Dispatcher, MessageEvent, Outbound};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

/// Author id used for console input. Must differ from the bot's own id.
const CONSOLE_AUTHOR: u64 = 0;

/// Outbound buffer size; a single dispatch never produces more than a
/// handful of messages.
const OUTBOUND_BUFFER: usize = 64;

/// Run the console gateway until stdin closes.
pub async fn run(dispatcher: Arc<Dispatcher>) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let (tx, mut rx) = mpsc::channel::<Outbound>(OUTBOUND_BUFFER);

    info!("Console gateway ready");

    while let Some(line) = lines.next_line().await? {
        if line.trim() == "stats" {
            for (name, count) in dispatcher.command_stats() {
                println!("{name}: {count}");
            }
            continue;
        }

        let event = MessageEvent::text(CONSOLE_AUTHOR, "console", line);
        dispatcher.dispatch(&event, &tx).await;

        // The handler has completed, so its output is already buffered.
        while let Ok(out) = rx.try_recv() {
            println!("{}", out.text);
        }
    }

    info!("Console gateway closed");
    Ok(())
}
