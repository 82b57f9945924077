//! Successor-bounded coding of sorted lists.
//!
//! A list is written as a cardinality header followed by its values in
//! non-increasing order. The first value gets a full 32-bit field; every
//! later one gets a field as wide as the value written just before it:
//!
//! ```text
//! [cardinality: header_bits][v1: 32][v2: bit_len(v1)] ... [vn: bit_len(vn-1)]
//! ```
//!
//! Ascending lists are written from the last index down, descending lists
//! from the first index up, so either way the written sequence only ever
//! shrinks and each field is wide enough for the value in it.
//!
//! [`Compressor`] and [`Decompressor`] work on byte buffers. The
//! [`ListCode`] trait underneath writes to any [`BitWrite`] and reads from
//! any [`BitRead`], so lists can also be packed back to back into one
//! stream.
//!
//! [`BitWrite`]: ../stream/trait.BitWrite.html
//! [`BitRead`]: ../stream/trait.BitRead.html

mod traits;
pub use self::traits::*;

mod config;
pub use self::config::*;

mod compress;
pub use self::compress::*;

mod decompress;
pub use self::decompress::*;

/// Width of the first value field, which has no predecessor to bound it.
pub const FIRST_VALUE_BITS: usize = 32;
