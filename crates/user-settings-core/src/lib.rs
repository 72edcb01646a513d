//! # user-settings-core
//!
//! Shared library for the user-settings tool containing the feature catalog,
//! the in-memory settings bit field, and the codec that packs eight feature
//! flags into a single byte.
//!
//! This crate has zero dependencies on the console, the file system, or any
//! runtime.  The `user-settings` application crate builds the interactive
//! prompts and the settings file on top of it.
//!
//! # Architecture overview (for beginners)
//!
//! The tool asks the user to switch eight features on or off, stores the
//! answers as one byte on disk, and then lets the user ask about individual
//! features.  This crate defines:
//!
//! - **`domain`** – The fixed list of feature names (`FeatureCatalog`) and the
//!   eight-flag value (`SettingsBitField`) that the rest of the program passes
//!   around.
//!
//! - **`codec`** – How eight booleans become one byte and back.  Bit `i`
//!   (counting from the least-significant bit) holds feature `i`.

pub mod codec;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `user_settings_core::SettingsBitField` instead of the full module path.
pub use codec::bits::{decode_byte, encode_flags, is_bit_set, render_binary, CodecError};
pub use domain::features::{FeatureCatalog, FeatureName, DEFAULT_FEATURE_NAMES, FEATURE_COUNT};
pub use domain::settings::{FeatureState, SettingsBitField};
