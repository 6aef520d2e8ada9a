//! ADIF decoder, encoder and per-type validation.

/// Text to records.
pub mod decode;
/// Records to text.
pub mod encode;
/// Per-type grammar checks.
pub mod validate;

pub use decode::{DecodeWarning, Decoded, decode};
pub use encode::{EncodeConfig, encode, encode_with};
pub use validate::is_valid;
