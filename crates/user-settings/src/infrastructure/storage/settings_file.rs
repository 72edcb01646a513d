//! One-byte settings file persistence.
//!
//! The file holds exactly one byte: bit `i` (least-significant first) is
//! feature `i`.  Every call opens, fully writes or fully reads, and closes the
//! file; nothing is cached between calls.
//!
//! ```text
//! $ xxd user_settings.bin
//! 00000000: 81                                       .
//! ```
//! (`0x81`: the first and the last feature are enabled.)

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::run_session::{SettingsRepository, StorageError};

/// Writes `byte` to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`StorageError::Io`] if the file cannot be created or written.
pub fn save_settings_byte(byte: u8, path: &Path) -> Result<(), StorageError> {
    std::fs::write(path, [byte]).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), byte, "settings byte written");
    Ok(())
}

/// Reads the single settings byte from `path`.
///
/// # Errors
///
/// - [`StorageError::NotFound`] if no file exists at `path`.
/// - [`StorageError::CorruptData`] if the file is empty or longer than one byte.
/// - [`StorageError::Io`] for any other file-system failure.
pub fn load_settings_byte(path: &Path) -> Result<u8, StorageError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StorageError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match bytes.as_slice() {
        [byte] => {
            debug!(path = %path.display(), byte = *byte, "settings byte read");
            Ok(*byte)
        }
        other => Err(StorageError::CorruptData {
            path: path.to_path_buf(),
            len: other.len(),
        }),
    }
}

/// The settings file at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for SettingsFile {
    fn save(&self, byte: u8) -> Result<(), StorageError> {
        save_settings_byte(byte, &self.path)
    }

    fn load(&self) -> Result<u8, StorageError> {
        load_settings_byte(&self.path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
