//! Console infrastructure: line-oriented terminal I/O.
//!
//! [`LineConsole`] adapts any `BufRead` + `Write` pair to the
//! [`Console`] port.  The binary uses [`LineConsole::stdio`]; the generic form
//! also lets tests drive it from an in-memory cursor.
//!
//! # Testability
//!
//! [`mock::ScriptedConsole`] replays queued answers and records everything the
//! use cases print, without touching the real terminal.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::application::console::{Console, ConsoleError};

pub mod mock;

/// [`Console`] over a buffered reader and a writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    buf: Vec<u8>,
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: Vec::new(),
        }
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    /// Reads one line as raw bytes.  Bytes that are not valid UTF-8 become
    /// U+FFFD, so a garbled line is ordinary invalid input, not an I/O error.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(strip_line_ending(&line).to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
