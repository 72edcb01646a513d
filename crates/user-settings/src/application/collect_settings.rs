//! CollectSettings: builds the initial settings from yes/no answers.
//!
//! Each feature in the catalog gets one prompt.  Only the literal lines `"1"`
//! and `"0"` are accepted; anything else prints a hint and reads another line
//! for the same feature.  Invalid answers are never returned as errors.

use tracing::{debug, warn};
use user_settings_core::{FeatureCatalog, SettingsBitField, FEATURE_COUNT};

use crate::application::console::{Console, ConsoleError};

/// Printed after an answer that is neither `0` nor `1`.
pub const INVALID_ANSWER_MESSAGE: &str = "Invalid input. Please enter 1 (Yes) or 0 (No).";

/// Prompt for the feature at zero-based `index`.
pub fn enable_prompt(index: usize, name: &str) -> String {
    format!("Enable {} - {}? (1 for Yes, 0 for No): ", index + 1, name)
}

/// Interprets one answer line: `"1"` is yes, `"0"` is no, anything else is
/// rejected.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

/// Prompts for every feature in catalog order and returns the answers.
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console fails or input ends before all
/// eight answers were given.
pub fn collect_settings<C: Console + ?Sized>(
    catalog: &FeatureCatalog,
    console: &mut C,
) -> Result<SettingsBitField, ConsoleError> {
    let mut flags = [false; FEATURE_COUNT];

    for (index, name) in catalog.iter() {
        console.write(&enable_prompt(index, name.as_str()))?;
        flags[index] = loop {
            let line = console.read_line()?;
            match parse_answer(&line) {
                Some(answer) => break answer,
                None => {
                    warn!(feature = index + 1, input = %line, "rejected non-binary answer");
                    console.write_line(INVALID_ANSWER_MESSAGE)?;
                }
            }
        };
        debug!(feature = index + 1, enabled = flags[index], "answer recorded");
    }

    Ok(SettingsBitField::new(flags))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
