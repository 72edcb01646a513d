//! Feature catalog: the fixed, ordered list of toggles the tool manages.
//!
//! Index `i` in the catalog is the same index used for bit `i` of the stored
//! byte, so the order here is part of the on-disk format.  The catalog is an
//! ordinary value passed to every component that needs names; nothing reads it
//! from a global.

use std::fmt;

/// Number of feature flags held in one settings byte.
pub const FEATURE_COUNT: usize = 8;

/// Labels of the built-in features, in bit order (bit 0 first).
pub const DEFAULT_FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "SMS Notifications",
    "Push Notifications",
    "Bio-metrics",
    "Camera",
    "Location",
    "NFC",
    "Vouchers",
    "Loyalty",
];

/// Human-readable label of a single feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureName(String);

impl FeatureName {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable, ordered set of exactly [`FEATURE_COUNT`] feature names.
///
/// # Examples
///
/// ```rust
/// use user_settings_core::FeatureCatalog;
///
/// let catalog = FeatureCatalog::default();
/// assert_eq!(catalog.name(0).unwrap().as_str(), "SMS Notifications");
/// assert_eq!(catalog.name(7).unwrap().as_str(), "Loyalty");
/// assert!(catalog.name(8).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCatalog {
    names: [FeatureName; FEATURE_COUNT],
}

impl FeatureCatalog {
    /// Builds a catalog from labels given in bit order.
    pub fn new(labels: [&str; FEATURE_COUNT]) -> Self {
        Self {
            names: labels.map(FeatureName::new),
        }
    }

    /// Returns the name at zero-based `index`, or `None` outside `0..8`.
    pub fn name(&self, index: usize) -> Option<&FeatureName> {
        self.names.get(index)
    }

    /// Iterates over `(index, name)` pairs in bit order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FeatureName)> {
        self.names.iter().enumerate()
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURE_NAMES)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
