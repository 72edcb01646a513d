//! Codec module: packing feature flags into the stored byte.

pub mod bits;

pub use bits::{decode_byte, encode_flags, is_bit_set, pack_flags, render_binary, CodecError};
