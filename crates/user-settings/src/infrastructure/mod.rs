//! Infrastructure layer: terminal and file-system adapters.
//!
//! # Sub-modules
//!
//! - **`console`** – [`crate::application::console::Console`] over stdin/stdout,
//!   plus a scripted mock for tests.
//! - **`storage`** – The one-byte settings file, plus an in-memory mock.

pub mod console;
pub mod storage;
