//! Runtime configuration for the user-settings tool.
//!
//! [`AppConfig`] is a plain struct with no environment reads of its own; the
//! binary fills it from CLI arguments (see `main.rs`), and tests build it
//! directly.

use std::path::PathBuf;

/// File name used when no path is configured, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "user_settings.bin";

/// All runtime configuration for one interactive session.
///
/// # Example
///
/// ```rust
/// use user_settings::config::AppConfig;
///
/// let cfg = AppConfig::default();
/// assert!(cfg.settings_path.ends_with("user_settings.bin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the one-byte settings file is written and read back.
    pub settings_path: PathBuf,
}

impl AppConfig {
    pub fn with_settings_path(path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: path.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_settings_path(DEFAULT_SETTINGS_FILE)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
