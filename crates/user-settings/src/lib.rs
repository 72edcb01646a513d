//! user-settings library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # Layers
//!
//! ```text
//! main.rs          CLI parsing, logging, wiring
//! application/     collect answers, query loop, session orchestration
//! infrastructure/  stdin/stdout console, settings file on disk
//! config           runtime settings (settings file path)
//! ```

pub mod application;
pub mod config;
pub mod infrastructure;
