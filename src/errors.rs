//! Errors reported by the compressor and decompressor.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing a list.
///
/// Mismatched configuration between a compressor and the decompressor
/// reading its output is *not* detected; it decodes to wrong values.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured cardinality header width is outside `1..=32`.
    #[error("cardinality header size out of bound: {0} bits (expected 1 to 32)")]
    CardinalityHeaderSizeOutOfBound(u32),

    /// The list has too many values for its length to fit in the header.
    #[error("input too long: {len} values do not fit in a {header_bits}-bit header")]
    InputTooLong {
        /// Length of the rejected list.
        len: usize,
        /// Configured header width.
        header_bits: u32,
    },

    /// The compressed input ended before every announced value was read.
    #[error("truncated input: more bits expected")]
    TruncatedInput,

    /// The output buffer cannot hold the compressed list.
    #[error("output too small: {needed_bits} bits needed, {available_bits} available")]
    OutputTooSmall {
        /// Exact size of the compressed list.
        needed_bits: u64,
        /// Capacity of the supplied buffer.
        available_bits: u64,
    },

    /// A bit stream failed for a reason other than running out of bits,
    /// such as a sink refusing a write it did not announce room for.
    #[error("bit stream error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Error::TruncatedInput,
            _ => Error::Io(err),
        }
    }
}

/// Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;
