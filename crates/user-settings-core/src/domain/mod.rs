//! Domain entities for user-settings.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of the program.  Domain code has **no** imports from
//! the console, the file system, or any framework, so it can be unit-tested
//! in isolation.  Here it defines which features exist and what a complete set
//! of answers looks like.

/// The fixed, ordered list of feature names.
pub mod features;

/// The eight-flag settings value.
pub mod settings;
