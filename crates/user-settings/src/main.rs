//! user-settings — entry point.
//!
//! Asks the user to enable or disable each of eight features, stores the
//! answers as a single byte in a settings file, reads that byte back, and then
//! answers "is feature N enabled?" until the user enters 0.
//!
//! # Usage
//!
//! ```text
//! user-settings [OPTIONS]
//!
//! Options:
//!   --settings-file <PATH>   Settings file to write and read [default: user_settings.bin]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Default             | Description                  |
//! |-----------------------|---------------------|------------------------------|
//! | `USER_SETTINGS_FILE`  | `user_settings.bin` | Settings file path           |
//! | `RUST_LOG`            | `warn`              | Log filter (logs go to stderr) |
//!
//! # Exit status
//!
//! 0 when the user leaves the query loop with 0.  A missing or corrupt
//! settings file, a file-system error, or closed input ends the run with an
//! error message and status 1.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use user_settings::application::run_session::run_session;
use user_settings::config::{AppConfig, DEFAULT_SETTINGS_FILE};
use user_settings::infrastructure::console::LineConsole;
use user_settings::infrastructure::storage::settings_file::SettingsFile;
use user_settings_core::FeatureCatalog;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Interactive feature-toggle settings stored in one byte.
#[derive(Debug, Parser)]
#[command(
    name = "user-settings",
    about = "Set eight feature toggles, store them in a one-byte file, and query them",
    version
)]
struct Cli {
    /// Settings file written after the prompts and read back before querying.
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE, env = "USER_SETTINGS_FILE")]
    settings_file: PathBuf,
}

impl Cli {
    fn into_app_config(self) -> AppConfig {
        AppConfig::with_settings_path(self.settings_file)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the prompts on stdout stay clean.  `RUST_LOG`
    // overrides the default `warn` level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_app_config();
    info!(path = %config.settings_path.display(), "user-settings starting");

    let catalog = FeatureCatalog::default();
    let store = SettingsFile::new(config.settings_path.clone());
    let mut console = LineConsole::stdio();

    let summary = run_session(&catalog, &mut console, &store).with_context(|| {
        format!(
            "user settings session failed (settings file: {})",
            config.settings_path.display()
        )
    })?;

    info!(
        stored = summary.stored,
        answered = summary.queries.answered,
        "user-settings finished"
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
