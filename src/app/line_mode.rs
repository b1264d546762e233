use super::view::is_quit_command;
use crate::state::{ChatSession, WELCOME_TEXT};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Plain stdin/stdout conversation for pipes and dumb terminals: one query
/// per input line, one reply per turn, same state machine as the TUI.
pub async fn run_line_mode<R, W>(mut session: ChatSession, reader: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "assistant> {WELCOME_TEXT}")?;
    out.flush()?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim_end_matches('\r');
        if text.is_empty() {
            continue;
        }
        if is_quit_command(text.trim()) {
            break;
        }

        if let Err(rejected) = session.send_message(text).await {
            tracing::debug!(%rejected, "line ignored");
            continue;
        }
        if let Some(reply) = session.state().messages().last() {
            writeln!(out, "{}> {}", reply.role.as_str(), reply.content)?;
            if let Some(summary) = reply.meta.as_ref().and_then(|meta| meta.summary()) {
                writeln!(out, "  ({summary})")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
