//! The interactive read-dispatch loop.
//!
//! [`run`] reads one command per line from any [`BufRead`] source and writes
//! replies to any [`Write`] sink, so the same loop drives stdin/stdout in
//! the binary and in-memory buffers in tests.

use crate::commands::{dispatch, parse_input, Command, Reply, FAREWELL};
use crate::config::Config;
use crate::metrics::SessionMetrics;
use crate::models::AddressBook;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// State owned by one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    book: AddressBook,
    metrics: SessionMetrics,
    prompt: String,
}

impl Session {
    /// Create an empty session configured from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            metrics: SessionMetrics::new(),
            prompt: config.prompt.clone(),
        }
    }

    /// Parse and dispatch one line.
    ///
    /// Returns `None` for a blank line, which is skipped without dispatch.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let Some(input) = parse_input(line) else {
            self.metrics.record_blank_line();
            return None;
        };

        let command = Command::from_keyword(&input.command);
        self.metrics.record_command(command);
        Some(dispatch(command, &input.args, &mut self.book))
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }
}

/// Run `session` until `exit`/`close` or end of input.
///
/// Both ways out print the farewell and return `Ok`.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run<R, W>(session: &mut Session, mut input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        if !session.prompt.is_empty() {
            write!(output, "{}", session.prompt).context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;
        }

        let Some(line) = read_line(&mut input, &mut buf).context("Failed to read input line")?
        else {
            debug!("End of input");
            break;
        };

        match session.handle_line(&line) {
            None => continue,
            Some(Reply::Message(message)) => {
                writeln!(output, "{}", message).context("Failed to write reply")?;
            }
            Some(Reply::Exit) => break,
        }
    }

    writeln!(output, "{}", FAREWELL).context("Failed to write reply")?;
    output.flush().context("Failed to flush output")?;

    let summary = session.metrics.summary();
    info!(
        commands = summary.commands_total,
        unknown_commands = summary.unknown_commands_total,
        blank_lines = summary.blank_lines_total,
        contacts = session.book.len(),
        duration_ms = summary.session_duration_ms,
        "Session finished"
    );

    Ok(())
}

/// Read one line, decoding invalid UTF-8 lossily.
///
/// Returns `None` at end of input. The trailing `\n` or `\r\n` is stripped.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    let line = String::from_utf8_lossy(buf);
    if let Cow::Owned(_) = line {
        warn!("Input line was not valid UTF-8");
    }
    Ok(Some(line.into_owned()))
}
