//! Integration tests for the full interactive session.
//!
//! Each test drives collect → save → load → query through the public API with
//! a real settings file in a temporary directory, checking the exact lines a
//! user would see.

use std::io::Cursor;
use std::path::PathBuf;

use user_settings::application::console::ConsoleError;
use user_settings::application::query_features::{
    EXIT_MESSAGE, INVALID_NUMBER_MESSAGE, QUERY_PROMPT,
};
use user_settings::application::run_session::{run_session, SessionError, StorageError};
use user_settings::infrastructure::console::mock::ScriptedConsole;
use user_settings::infrastructure::console::LineConsole;
use user_settings::infrastructure::storage::settings_file::{load_settings_byte, SettingsFile};
use user_settings_core::FeatureCatalog;
use uuid::Uuid;

/// A temp directory holding `user_settings.bin`, removed on drop.
struct TempSettings {
    dir: PathBuf,
}

impl TempSettings {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("user_settings_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join("user_settings.bin")
    }
}

impl Drop for TempSettings {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}

/// Eight answers followed by query-loop input.
fn script(answers: [&str; 8], queries: &[&str]) -> Vec<String> {
    answers
        .iter()
        .chain(queries.iter())
        .map(|s| s.to_string())
        .collect()
}

fn report(number: usize, enabled: bool) -> String {
    let catalog = FeatureCatalog::default();
    let name = catalog.name(number - 1).expect("feature exists");
    let state = if enabled { "enabled" } else { "disabled" };
    format!("{number} - {name} is {state}.")
}

#[test]
fn test_first_feature_only_is_stored_as_one_and_reported() {
    // Arrange
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(
        ["1", "0", "0", "0", "0", "0", "0", "0"],
        &["1", "2", "3", "4", "5", "6", "7", "8", "0"],
    ));

    // Act
    let summary = run_session(&catalog, &mut console, &store).expect("session completes");

    // Assert
    assert_eq!(summary.stored, 1);
    assert_eq!(std::fs::read(tmp.path()).unwrap(), vec![0b0000_0001]);
    let lines = console.output_lines();
    assert!(lines.contains(&"User settings loaded from file: 00000001".to_string()));
    assert!(lines.contains(&report(1, true)));
    for n in 2..=8 {
        assert!(lines.contains(&report(n, false)), "feature {n} must be disabled");
    }
    assert_eq!(summary.queries.answered, 8);
}

#[test]
fn test_last_feature_only_is_stored_as_128_and_reported() {
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(
        ["0", "0", "0", "0", "0", "0", "0", "1"],
        &["8", "1", "7", "0"],
    ));

    let summary = run_session(&catalog, &mut console, &store).unwrap();

    assert_eq!(summary.stored, 128);
    assert_eq!(load_settings_byte(&tmp.path()).unwrap(), 128);
    let lines = console.output_lines();
    assert!(lines.contains(&"8 - Loyalty is enabled.".to_string()));
    assert!(lines.contains(&report(1, false)));
    assert!(lines.contains(&report(7, false)));
}

#[test]
fn test_all_disabled_and_immediate_exit_answers_nothing() {
    // Arrange
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(["0"; 8], &["0"]));

    // Act
    let summary = run_session(&catalog, &mut console, &store).unwrap();

    // Assert
    assert_eq!(summary.stored, 0);
    assert_eq!(summary.queries.answered, 0);
    let lines = console.output_lines();
    assert_eq!(lines.last().map(String::as_str), Some(EXIT_MESSAGE));
    assert!(!lines.iter().any(|l| l.ends_with("is enabled.") || l.ends_with("is disabled.")));
}

#[test]
fn test_all_disabled_every_query_reports_disabled() {
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(
        ["0"; 8],
        &["1", "2", "3", "4", "5", "6", "7", "8", "0"],
    ));

    run_session(&catalog, &mut console, &store).unwrap();

    let lines = console.output_lines();
    for n in 1..=8 {
        assert!(lines.contains(&report(n, false)));
    }
}

#[test]
fn test_invalid_query_numbers_are_rejected_until_valid() {
    // Arrange: "9", "-1" and "abc" must each be refused before "3" is answered
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(
        ["0", "0", "1", "0", "0", "0", "0", "0"],
        &["9", "-1", "abc", "3", "0"],
    ));

    // Act
    let summary = run_session(&catalog, &mut console, &store).unwrap();

    // Assert
    assert_eq!(summary.queries.rejected, 3);
    assert_eq!(summary.queries.answered, 1);
    let lines = console.output_lines();
    let hint_count = lines.iter().filter(|l| *l == INVALID_NUMBER_MESSAGE).count();
    assert_eq!(hint_count, 3);
    // Two prompts: one before "3" was accepted, one before "0".
    let prompt_count = lines.iter().filter(|l| *l == QUERY_PROMPT).count();
    assert_eq!(prompt_count, 2);
    assert!(lines.contains(&"3 - Bio-metrics is enabled.".to_string()));
}

#[test]
fn test_session_overwrites_existing_settings_file() {
    let tmp = TempSettings::new();
    std::fs::write(tmp.path(), [0xFFu8, 0xFF, 0xFF]).unwrap();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(["0", "1", "0", "1", "0", "1", "0", "1"], &["0"]));

    let summary = run_session(&catalog, &mut console, &store).unwrap();

    assert_eq!(summary.stored, 0b1010_1010);
    assert_eq!(std::fs::read(tmp.path()).unwrap(), vec![0b1010_1010]);
}

#[test]
fn test_unwritable_settings_path_ends_session_with_io_error() {
    // Arrange: the parent directory does not exist
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.dir.join("missing").join("user_settings.bin"));
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(script(["1"; 8], &["0"]));

    // Act
    let result = run_session(&catalog, &mut console, &store);

    // Assert
    assert!(matches!(
        result,
        Err(SessionError::Storage(StorageError::Io { .. }))
    ));
}

#[test]
fn test_closed_input_during_prompts_ends_session() {
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let mut console = ScriptedConsole::new(["1", "0"]);

    let result = run_session(&catalog, &mut console, &store);

    assert!(matches!(
        result,
        Err(SessionError::Console(ConsoleError::InputClosed))
    ));
    assert!(!tmp.path().exists(), "nothing is saved before all answers are in");
}

#[test]
fn test_line_console_session_produces_expected_stdout() {
    // Arrange: drive the real line adapter from an in-memory stdin
    let tmp = TempSettings::new();
    let store = SettingsFile::new(tmp.path());
    let catalog = FeatureCatalog::default();
    let stdin = "1\r\nx\n0\n0\n0\n0\n1\n0\n0\n6\n0\n";
    let mut console = LineConsole::new(Cursor::new(stdin.as_bytes().to_vec()), Vec::new());

    // Act
    let summary = run_session(&catalog, &mut console, &store).unwrap();

    // Assert
    assert_eq!(summary.stored, 0b0010_0001);
    let stdout = String::from_utf8(console.into_writer()).unwrap();
    assert!(stdout.starts_with("Enable 1 - SMS Notifications? (1 for Yes, 0 for No): "));
    assert!(stdout.contains("Enable 2 - Push Notifications? (1 for Yes, 0 for No): Invalid input. Please enter 1 (Yes) or 0 (No).\n"));
    assert!(stdout.contains("User settings have been saved to the file.\n"));
    assert!(stdout.contains("User settings loaded from file: 00100001\n"));
    assert!(stdout.contains("6 - NFC is enabled.\n"));
    assert!(stdout.ends_with("Exiting feature check.\n"));
}
