//! Scripted console for unit and integration testing.
//!
//! Answers are queued up front; every read pops the next one and echoes it
//! into the transcript followed by a newline, the way a terminal shows what
//! the user typed.  When the queue is empty, reads fail with
//! [`ConsoleError::InputClosed`].

use std::collections::VecDeque;

use crate::application::console::{Console, ConsoleError};

/// A [`Console`] that replays queued input lines and records all output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    /// Creates a console that will return `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Number of queued lines not yet read.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Everything written, including echoed input.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// The transcript split into lines.
    pub fn output_lines(&self) -> Vec<String> {
        self.transcript.lines().map(str::to_string).collect()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let line = self.input.pop_front().ok_or(ConsoleError::InputClosed)?;
        self.transcript.push_str(&line);
        self.transcript.push('\n');
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}
