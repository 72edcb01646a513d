//! In-memory settings store for testing.
//!
//! Allows session tests to run without a file system, and to simulate a
//! store that hands back a different byte or fails on load.

use std::cell::Cell;
use std::path::PathBuf;

use crate::application::run_session::{SettingsRepository, StorageError};

#[derive(Debug, Clone, Copy)]
enum LoadBehaviour {
    /// Return what was last saved.
    Saved,
    /// Ignore what was saved and return this byte.
    Override(u8),
    /// Fail as if the file had disappeared.
    Missing,
}

/// A [`SettingsRepository`] that keeps the byte in memory.
#[derive(Debug)]
pub struct MemorySettingsStore {
    byte: Cell<Option<u8>>,
    load: LoadBehaviour,
}

impl MemorySettingsStore {
    /// Empty store; `load` returns what was last saved.
    pub fn new() -> Self {
        Self {
            byte: Cell::new(None),
            load: LoadBehaviour::Saved,
        }
    }

    /// Store whose `load` always returns `byte`.
    pub fn with_load_override(byte: u8) -> Self {
        Self {
            byte: Cell::new(None),
            load: LoadBehaviour::Override(byte),
        }
    }

    /// Store whose `load` always fails with [`StorageError::NotFound`].
    pub fn failing_load() -> Self {
        Self {
            byte: Cell::new(None),
            load: LoadBehaviour::Missing,
        }
    }

    /// The last saved byte, if any.
    pub fn stored(&self) -> Option<u8> {
        self.byte.get()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository for MemorySettingsStore {
    fn save(&self, byte: u8) -> Result<(), StorageError> {
        self.byte.set(Some(byte));
        Ok(())
    }

    fn load(&self) -> Result<u8, StorageError> {
        let path = PathBuf::from("<memory>");
        match self.load {
            LoadBehaviour::Override(byte) => Ok(byte),
            LoadBehaviour::Missing => Err(StorageError::NotFound { path }),
            LoadBehaviour::Saved => self
                .byte
                .get()
                .ok_or(StorageError::CorruptData { path, len: 0 }),
        }
    }
}
