//! RunSession: the full interactive sequence.
//!
//! ```text
//! collect_settings ──► SettingsRepository::save ──► SettingsRepository::load
//!                                                          │
//!                                                          ▼
//!                                                 FeatureQueryLoop::run
//! ```
//!
//! The settings are read back from storage before querying, so the loop
//! always answers from what is actually on disk.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};
use user_settings_core::{render_binary, FeatureCatalog, SettingsBitField};

use crate::application::collect_settings::collect_settings;
use crate::application::console::{Console, ConsoleError};
use crate::application::query_features::{FeatureQueryLoop, QueryOutcome};

/// Printed once the byte has been written.
pub const SAVED_MESSAGE: &str = "User settings have been saved to the file.";

/// Error type for settings storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No settings file exists at the path.
    #[error("settings file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file exists but does not hold exactly one byte.
    #[error("corrupt settings file {path}: expected exactly 1 byte, found {len}")]
    CorruptData { path: PathBuf, len: usize },

    /// Any other file-system failure.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persistence for the one-byte settings value.
///
/// The production implementation is
/// [`crate::infrastructure::storage::settings_file::SettingsFile`]; tests may
/// use [`crate::infrastructure::storage::mock::MemorySettingsStore`].
pub trait SettingsRepository {
    /// Replaces the stored byte.
    fn save(&self, byte: u8) -> Result<(), StorageError>;

    /// Reads the stored byte back.
    fn load(&self) -> Result<u8, StorageError>;
}

/// Everything that can end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Byte read back from storage.
    pub stored: u8,
    pub queries: QueryOutcome,
}

/// Runs collect → save → load → query against `store`.
///
/// # Errors
///
/// Storage failures (missing file, corrupt data, I/O) and console failures
/// end the session and are returned unchanged.  Invalid user input never
/// produces an error.
pub fn run_session<C, R>(
    catalog: &FeatureCatalog,
    console: &mut C,
    store: &R,
) -> Result<SessionSummary, SessionError>
where
    C: Console + ?Sized,
    R: SettingsRepository + ?Sized,
{
    info!("collecting initial settings");
    let settings = collect_settings(catalog, console)?;

    store.save(settings.to_byte())?;
    debug!(byte = settings.to_byte(), "settings saved");
    console.write_line(SAVED_MESSAGE)?;

    let stored = store.load()?;
    debug!(byte = stored, "settings loaded");
    console.write_line(&format!(
        "User settings loaded from file: {}",
        render_binary(stored)
    ))?;

    let queries = FeatureQueryLoop::new(SettingsBitField::from_byte(stored), catalog).run(console)?;
    info!(answered = queries.answered, "feature check finished");

    Ok(SessionSummary { stored, queries })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
