//! # Console Loop
//!
//! Feeds lines to the dispatcher and prints replies. Alarms from finished timers
//! are printed as they arrive, between turns.

use crate::application::dispatcher::Dispatcher;
use crate::domain::response::Response;
use crate::infrastructure::timer::Alarm;
use crate::strings::{help, messages};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

/// Runs until end of input or a quit command.
pub async fn run<R, W>(
    bot: &mut Dispatcher,
    input: R,
    mut output: W,
    alarms: &mut UnboundedReceiver<Alarm>,
    opening: Option<Response>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    write_line(&mut output, help::BANNER).await?;
    if let Some(rsp) = opening {
        write_line(&mut output, &help::bot_line(bot.name(), &rsp.text)).await?;
    }

    loop {
        output.write_all(help::PROMPT.as_bytes()).await?;
        output.flush().await?;

        tokio::select! {
            biased;

            Some(alarm) = alarms.recv() => {
                write_line(&mut output, "").await?;
                write_line(&mut output, &messages::timer_fired(alarm.seconds)).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                if help::QUIT_COMMANDS.contains(&text) {
                    break;
                }

                let reply = match bot.handle(text) {
                    Ok(outcome) => outcome
                        .text()
                        .map(str::to_string)
                        .unwrap_or_else(|| help::NO_RESPONSE.to_string()),
                    Err(e) => {
                        tracing::error!("Turn failed: {}", e);
                        help::turn_failed(&e.to_string())
                    }
                };
                write_line(&mut output, &help::bot_line(bot.name(), &reply)).await?;
            }
        }
    }

    tracing::info!("Session ended after {} turns", bot.turn());
    Ok(())
}
