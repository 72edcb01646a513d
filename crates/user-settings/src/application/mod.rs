//! Application layer use cases for the user-settings tool.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The *application* layer sits between the domain (the feature catalog and
//! the bit field in `user-settings-core`) and the infrastructure (the real
//! terminal and the settings file).
//!
//! Code in this layer talks to the outside world only through the
//! [`console::Console`] and [`run_session::SettingsRepository`] traits, so
//! every prompt sequence can be tested with scripted input and an in-memory
//! store.
//!
//! # Sub-modules
//!
//! - **`console`**          – The line-oriented console port and its error type.
//! - **`collect_settings`** – Asks yes/no for each feature and builds the
//!   initial [`user_settings_core::SettingsBitField`].
//! - **`query_features`**   – The repeating "which feature?" loop.
//! - **`run_session`**      – Collect → save → load → query, end to end.

pub mod collect_settings;
pub mod console;
pub mod query_features;
pub mod run_session;
