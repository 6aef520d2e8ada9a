//! Error types for the ADIF codec.

use thiserror::Error;

/// Failures that abort a decode, read or write as a whole.
///
/// Invalid or unrecognised fields are not errors: the decoder drops them and
/// carries on.
#[derive(Debug, Error)]
pub enum AdifError {
    /// Reading or writing the underlying file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The number of `<eor>` markers does not match the number of record blocks.
    #[error(
        "structural corruption: {eor_markers} end-of-record marker(s) for {record_blocks} record block(s)"
    )]
    StructuralCorruption {
        /// `<eor>` markers consumed.
        eor_markers: usize,
        /// Record blocks processed.
        record_blocks: usize,
    },
}

/// Convenience alias that pins the error type to [`AdifError`].
pub type AdifResult<T> = Result<T, AdifError>;
