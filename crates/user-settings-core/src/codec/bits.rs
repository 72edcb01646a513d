//! Bit codec for packing feature flags into the one-byte settings format.
//!
//! Byte layout:
//! ```text
//!  bit:   7    6    5    4    3    2    1    0
//!       [f7] [f6] [f5] [f4] [f3] [f2] [f1] [f0]
//! ```
//! Flag `i` lives in bit `i`, least-significant bit first, so the encoded
//! value is `Σ flags[i] * 2^i`.  The same convention is used on save and on
//! query; nothing in the format is stored as text.

use thiserror::Error;
use tracing::trace;

use crate::domain::features::FEATURE_COUNT;

/// Errors that can occur while encoding flags or testing bits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// More flags were supplied than fit in one byte.
    #[error("too many flags: a settings byte holds {max}, got {given}")]
    TooManyFlags { given: usize, max: usize },

    /// The bit index is outside `0..8`.
    #[error("bit index {index} out of range: expected 0..{max}")]
    IndexOutOfRange { index: usize, max: usize },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Packs a full set of flags into a byte.  Cannot fail.
pub fn pack_flags(flags: &[bool; FEATURE_COUNT]) -> u8 {
    flags
        .iter()
        .enumerate()
        .fold(0u8, |acc, (bit, &on)| acc | (u8::from(on) << bit))
}

/// Encodes up to eight flags into a byte, `flags[0]` as the least-significant
/// bit.
///
/// A shorter slice leaves the missing high-order bits at 0.
///
/// # Errors
///
/// Returns [`CodecError::TooManyFlags`] if `flags` holds more than eight values.
///
/// # Examples
///
/// ```rust
/// use user_settings_core::encode_flags;
///
/// assert_eq!(encode_flags(&[true, false, true]).unwrap(), 0b0000_0101);
/// assert!(encode_flags(&[false; 9]).is_err());
/// ```
pub fn encode_flags(flags: &[bool]) -> Result<u8, CodecError> {
    if flags.len() > FEATURE_COUNT {
        return Err(CodecError::TooManyFlags {
            given: flags.len(),
            max: FEATURE_COUNT,
        });
    }
    if flags.len() < FEATURE_COUNT {
        trace!(given = flags.len(), "padding flag sequence with cleared high-order bits");
    }

    let mut padded = [false; FEATURE_COUNT];
    padded[..flags.len()].copy_from_slice(flags);
    Ok(pack_flags(&padded))
}

/// Unpacks a byte into eight flags; bit `i` becomes `flags[i]`.
pub fn decode_byte(byte: u8) -> [bool; FEATURE_COUNT] {
    std::array::from_fn(|bit| byte & (1 << bit) != 0)
}

/// Returns `true` if bit `index` (least-significant first) of `byte` is 1.
///
/// # Errors
///
/// Returns [`CodecError::IndexOutOfRange`] when `index` is 8 or greater.
pub fn is_bit_set(byte: u8, index: usize) -> Result<bool, CodecError> {
    if index >= FEATURE_COUNT {
        return Err(CodecError::IndexOutOfRange {
            index,
            max: FEATURE_COUNT,
        });
    }
    Ok(byte & (1 << index) != 0)
}

/// Renders the byte as eight binary digits, most-significant bit first.
///
/// This is the human-facing form printed after loading; the last digit is
/// the first feature.
pub fn render_binary(byte: u8) -> String {
    format!("{byte:08b}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
