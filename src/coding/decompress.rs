use std::cmp;

use log::debug;

use super::{Config, ListCode, Order, FIRST_VALUE_BITS};
use crate::errors::{Error, Result};
use crate::stream::{BitRead, BitReader, BitStream};
use crate::width::bit_len;

// Values reserved up front when the source cannot say how much is left.
const BLIND_RESERVE: usize = 1 << 16;

/// Decompresses lists written by a [`Compressor`] with the same
/// configuration.
///
/// [`Compressor`]: struct.Compressor.html
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decompressor {
    config: Config,
}

impl Decompressor {
    /// Creates a decompressor for lists sorted by `order` with lengths
    /// stored in `header_bits` bits.
    pub fn new(order: Order, header_bits: u32) -> Self {
        Decompressor::with_config(Config::new(order, header_bits))
    }

    /// Creates a decompressor from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Decompressor { config }
    }

    /// The decompressor's configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The sort order of output lists.
    #[inline]
    pub fn order(&self) -> Order {
        self.config.order()
    }

    /// The width of the cardinality header.
    #[inline]
    pub fn header_bits(&self) -> u32 {
        self.config.header_bits()
    }

    /// Reads only the length of the list compressed in `input`.
    pub fn cardinality(&self, input: &[u8]) -> Result<usize> {
        self.config.validate()?;
        let mut reader = BitReader::new(input);
        Ok(read_field(&mut reader, self.config.header_bits() as usize)? as usize)
    }

    /// Decompresses the list at the front of `input`. Trailing bytes are
    /// ignored.
    ///
    /// # Errors
    ///
    ///   - `CardinalityHeaderSizeOutOfBound` if the header width is not in
    ///     `1..=32`;
    ///   - `TruncatedInput` if `input` ends before the list does.
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u32>> {
        let mut output = Vec::new();
        self.decompress_into(input, &mut output)?;
        Ok(output)
    }

    /// Like `decompress`, but replaces the contents of `output` rather than
    /// allocating, and returns the number of values.
    ///
    /// On error `output` is left empty.
    pub fn decompress_into(&self, input: &[u8], output: &mut Vec<u32>) -> Result<usize> {
        let mut reader = BitReader::new(input);
        let len = self.config.decode_into(&mut reader, output)?;

        debug!(
            "decompressed {} values from {} bits",
            len,
            reader.position()
        );

        Ok(len)
    }
}

/// Reads the header, then every value in traversal order.
pub(super) fn read_list<R: BitRead>(
    config: &Config,
    source: &mut R,
    values: &mut Vec<u32>,
) -> Result<usize> {
    values.clear();
    let result = fill_list(config, source, values);
    if result.is_err() {
        values.clear();
    }
    result
}

fn fill_list<R: BitRead>(config: &Config, source: &mut R, values: &mut Vec<u32>) -> Result<usize> {
    config.validate()?;

    let cardinality = read_field(source, config.header_bits() as usize)?;

    // Every field takes at least one bit, so a header announcing more
    // values than there are bits left is corrupt.
    let reserve = match source.remaining() {
        Some(remaining) => {
            if cardinality > 0 && remaining < FIRST_VALUE_BITS as u64 + cardinality - 1 {
                return Err(Error::TruncatedInput);
            }
            cardinality as usize
        }
        None => cmp::min(cardinality as usize, BLIND_RESERVE),
    };
    values.reserve(reserve);

    let mut width = FIRST_VALUE_BITS;
    for _ in 0..cardinality {
        let value = match source.read_int::<u32>(width)? {
            Some(value) => value,
            None => return Err(Error::TruncatedInput),
        };
        values.push(value);
        width = bit_len(value);
    }

    // Values arrive largest first.
    if config.order() == Order::Ascending {
        values.reverse();
    }

    Ok(cardinality as usize)
}

fn read_field<R: BitRead>(source: &mut R, nbits: usize) -> Result<u64> {
    match source.read_bits(nbits)? {
        Some(value) => Ok(value),
        None => Err(Error::TruncatedInput),
    }
}
