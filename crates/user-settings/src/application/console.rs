//! Console port: the line-oriented terminal the use cases talk to.
//!
//! The production implementation wraps stdin/stdout
//! ([`crate::infrastructure::console::LineConsole`]); tests use
//! [`crate::infrastructure::console::mock::ScriptedConsole`].

use thiserror::Error;

/// Error type for console operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input ended while a prompt was still waiting for an answer.
    #[error("console input closed while waiting for an answer")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Blocking, line-oriented console.
pub trait Console {
    /// Reads one line, without its trailing `\n` or `\r\n`.
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Writes `text` without a newline and flushes, leaving the cursor on the
    /// prompt line.
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        (**self).read_line()
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).write_line(text)
    }
}
