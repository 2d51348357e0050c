use std::borrow::Cow;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::commands::{CommandStatus, handle_command, parse_command};
use crate::config::SimulatorConfig;
use crate::session::Session;
use crate::utils::validation::{is_valid_input, sanitize_input};

const BANNER: &str = "=== File System Simulator ===\n\
Type 'help' for available commands or 'exit' to quit.\n";

/// Interactive front end: reads command lines and prints their results.
pub struct Shell {
    session: Session,
    config: SimulatorConfig,
}

impl Shell {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            session: Session::from_config(&config),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the shell on the process stdin/stdout until exit or end of input
    pub async fn start(&mut self) -> std::io::Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.run(reader, writer).await
    }

    /// Handles one line per iteration:
    ///
    /// - prints the prompt with the current path,
    /// - rejects lines over `max_command_length`,
    /// - dispatches the parsed command and writes its message.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.config.show_banner {
            writer.write_all(BANNER.as_bytes()).await?;
        }

        let mut buf = Vec::new();

        loop {
            let prompt = format!("{} {} ", self.session.pwd(), self.config.prompt_symbol);
            writer.write_all(prompt.as_bytes()).await?;
            writer.flush().await?;

            let line = match read_line_bounded(&mut reader, &mut buf, self.config.max_command_length)
                .await?
            {
                LineRead::Line(line) => line,
                LineRead::TooLong => {
                    warn!("Rejected input line over {} bytes", self.config.max_command_length);
                    writer.write_all(b"Command too long\n").await?;
                    continue;
                }
                LineRead::Eof => {
                    info!("End of input, leaving shell");
                    break;
                }
            };

            let input = sanitize_input(&line);
            if !is_valid_input(input, self.config.max_command_length) {
                warn!("Rejected input line of {} bytes", input.len());
                writer.write_all(b"Command too long\n").await?;
                continue;
            }

            let command = parse_command(input);
            let result = handle_command(&mut self.session, &command);

            if let Some(msg) = result.message {
                writer.write_all(msg.as_bytes()).await?;
            }

            match result.status {
                CommandStatus::Exit => {
                    info!("Exit requested");
                    break;
                }
                CommandStatus::Failure(reason) => debug!("Command failed: {}", reason),
                CommandStatus::Success => {}
            }
        }

        writer.flush().await
    }
}

enum LineRead {
    Line(String),
    TooLong,
    Eof,
}

/// Reads one line, buffering at most `max_length` bytes plus a CRLF.
///
/// Longer lines are drained up to their newline and reported as `TooLong`.
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
async fn read_line_bounded<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max_length: usize,
) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let limit = max_length.saturating_add(2);
    let mut read_any = false;
    let mut overflow = false;
    buf.clear();

    loop {
        let (used, done) = {
            let available = reader.fill_buf().await?;
            if available.is_empty() {
                break;
            }
            let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
                Some(pos) => (&available[..=pos], true),
                None => (available, false),
            };
            if !overflow && buf.len() + chunk.len() <= limit {
                buf.extend_from_slice(chunk);
            } else {
                overflow = true;
                buf.clear();
            }
            (chunk.len(), done)
        };
        read_any = true;
        reader.consume(used);
        if done {
            break;
        }
    }

    if !read_any {
        return Ok(LineRead::Eof);
    }
    if overflow {
        return Ok(LineRead::TooLong);
    }

    let line = String::from_utf8_lossy(buf);
    if matches!(line, Cow::Owned(_)) {
        debug!("Replaced invalid UTF-8 in input line");
    }
    Ok(LineRead::Line(line.into_owned()))
}
