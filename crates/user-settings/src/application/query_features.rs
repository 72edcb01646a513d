//! FeatureQueryLoop: answers "is feature N enabled?" until the user exits.
//!
//! # State machine
//!
//! ```text
//!             invalid line
//!             ┌──────────┐
//!             ▼          │
//!      ┌──────────────────┐   "1".."8" → report   ┌──────────────────┐
//!  ──► │  AwaitingInput   │ ◄──────────────────── │  (prints result) │
//!      └──────────────────┘                        └──────────────────┘
//!             │ "0"
//!             ▼
//!      ┌──────────────────┐
//!      │    Terminated    │
//!      └──────────────────┘
//! ```
//!
//! Each answer comes from [`SettingsBitField::state`] on the loaded settings;
//! the loop never mutates them.

use tracing::{debug, warn};
use user_settings_core::{FeatureCatalog, FeatureState, SettingsBitField, FEATURE_COUNT};

use crate::application::console::Console;
use crate::application::run_session::SessionError;

/// Printed at the start of every iteration.
pub const QUERY_PROMPT: &str =
    "Enter the feature number you want to check (1-8), or enter 0 to exit:";

/// Printed after a line that is not a number in `0..=8`.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number between 0 and 8.";

/// Printed when the user enters 0.
pub const EXIT_MESSAGE: &str = "Exiting feature check.";

/// A validated line from the query prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCommand {
    /// `0`: leave the loop.
    Exit,
    /// `1..=8`: one-based feature number.
    Check(usize),
}

impl QueryCommand {
    /// Parses a line as an integer in `0..=8`, ignoring surrounding
    /// whitespace.  Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let number: i64 = line.trim().parse().ok()?;
        match number {
            0 => Some(QueryCommand::Exit),
            n if (1..=FEATURE_COUNT as i64).contains(&n) => Some(QueryCommand::Check(n as usize)),
            _ => None,
        }
    }
}

/// Lifecycle of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryState {
    AwaitingInput,
    Terminated,
}

/// Summary returned once the user exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOutcome {
    /// Number of feature checks answered.
    pub answered: usize,
    /// Number of lines rejected as invalid.
    pub rejected: usize,
}

/// Formats the answer for one-based feature `number`.
pub fn report_line(number: usize, name: &str, state: FeatureState) -> String {
    format!("{number} - {name} is {state}.")
}

/// The repeating query prompt over one loaded settings byte.
pub struct FeatureQueryLoop<'a> {
    settings: SettingsBitField,
    catalog: &'a FeatureCatalog,
    state: QueryState,
    outcome: QueryOutcome,
}

impl<'a> FeatureQueryLoop<'a> {
    pub fn new(settings: SettingsBitField, catalog: &'a FeatureCatalog) -> Self {
        Self {
            settings,
            catalog,
            state: QueryState::AwaitingInput,
            outcome: QueryOutcome::default(),
        }
    }

    /// Runs until the user enters 0.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Console`] if the console fails or input ends
    /// before the user exits.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<QueryOutcome, SessionError> {
        while self.state == QueryState::AwaitingInput {
            self.step(console)?;
        }
        Ok(self.outcome)
    }

    /// Handles one prompt: reads lines until one is valid, then either
    /// reports a feature or terminates.
    fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), SessionError> {
        console.write_line(QUERY_PROMPT)?;

        let command = loop {
            let line = console.read_line()?;
            if let Some(command) = QueryCommand::parse(&line) {
                break command;
            }
            warn!(input = %line, "rejected feature number");
            self.outcome.rejected += 1;
            console.write_line(INVALID_NUMBER_MESSAGE)?;
        };

        match command {
            QueryCommand::Exit => {
                console.write_line(EXIT_MESSAGE)?;
                self.state = QueryState::Terminated;
            }
            QueryCommand::Check(number) => {
                let index = number - 1;
                let state = self
                    .settings
                    .state(index)
                    .unwrap_or(FeatureState::Disabled);
                let name = self
                    .catalog
                    .name(index)
                    .map(|n| n.as_str())
                    .unwrap_or_default();
                debug!(feature = number, %state, "feature checked");
                console.write_line(&report_line(number, name, state))?;
                self.outcome.answered += 1;
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
