//! The in-memory settings value: one boolean per catalog feature.

use std::fmt;

use crate::codec::bits::{decode_byte, is_bit_set, pack_flags};
use crate::domain::features::FEATURE_COUNT;

/// Whether a single feature is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureState {
    Enabled,
    Disabled,
}

impl From<bool> for FeatureState {
    fn from(enabled: bool) -> Self {
        if enabled {
            FeatureState::Enabled
        } else {
            FeatureState::Disabled
        }
    }
}

impl fmt::Display for FeatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureState::Enabled => f.write_str("enabled"),
            FeatureState::Disabled => f.write_str("disabled"),
        }
    }
}

/// Exactly [`FEATURE_COUNT`] feature flags, indexed like
/// [`crate::FeatureCatalog`].
///
/// The fixed-size array makes a partial field unrepresentable.  Index `i`
/// maps to bit `i` of the stored byte (least-significant bit first).
///
/// # Examples
///
/// ```rust
/// use user_settings_core::SettingsBitField;
///
/// let settings = SettingsBitField::new([true, false, false, false, false, false, false, true]);
/// assert_eq!(settings.to_byte(), 0b1000_0001);
/// assert_eq!(SettingsBitField::from_byte(0b1000_0001), settings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsBitField {
    flags: [bool; FEATURE_COUNT],
}

impl SettingsBitField {
    pub fn new(flags: [bool; FEATURE_COUNT]) -> Self {
        Self { flags }
    }

    /// Decodes a stored byte.
    pub fn from_byte(byte: u8) -> Self {
        Self::new(decode_byte(byte))
    }

    /// Encodes the field as the byte written to disk.
    pub fn to_byte(&self) -> u8 {
        pack_flags(&self.flags)
    }

    /// Tests bit `index` of the encoded byte.  `None` outside `0..8`.
    pub fn state(&self, index: usize) -> Option<FeatureState> {
        is_bit_set(self.to_byte(), index).ok().map(FeatureState::from)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
