//! Storage infrastructure: settings file persistence.
//!
//! The `settings_file` sub-module writes and reads the one-byte settings file.
//! The `mock` sub-module keeps the byte in memory so session tests can run
//! without touching the file system.

pub mod mock;
pub mod settings_file;
