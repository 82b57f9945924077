use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{compress, decompress, ListCode, FIRST_VALUE_BITS};
use crate::errors::{Error, Result};
use crate::stream::{BitRead, BitWrite};
use crate::width::{bit_len, size_in_bytes};

/// The narrowest allowed cardinality header.
pub const MIN_HEADER_BITS: u32 = 1;

/// The widest allowed cardinality header.
pub const MAX_HEADER_BITS: u32 = 32;

/// Header width used by `Config::default()`; it admits any list shorter
/// than `2^32`.
pub const DEFAULT_HEADER_BITS: u32 = 32;

/// The direction a list is sorted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Order {
    /// Smallest value first. Written from the last index down.
    Ascending,
    /// Largest value first. Written from the first index up.
    Descending,
}

impl Default for Order {
    fn default() -> Self {
        Order::Ascending
    }
}

impl Order {
    /// Whether `values` is sorted in this order. Equal neighbours are
    /// allowed.
    pub fn is_sorted(self, values: &[u32]) -> bool {
        values.windows(2).all(|pair| match self {
            Order::Ascending => pair[0] <= pair[1],
            Order::Descending => pair[0] >= pair[1],
        })
    }

    /// The index visited at `step` when walking a list of `len` values
    /// from its largest value to its smallest.
    #[inline]
    pub(crate) fn index(self, len: usize, step: usize) -> usize {
        debug_assert!(step < len);

        match self {
            Order::Ascending => len - 1 - step,
            Order::Descending => step,
        }
    }
}

/// Settings shared by a compressor and the decompressor reading its
/// output. The two must agree; nothing in the output records them.
///
/// Any header width can be stored here. Widths outside
/// `MIN_HEADER_BITS..=MAX_HEADER_BITS` are rejected when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    order: Order,
    header_bits: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Order::default(), DEFAULT_HEADER_BITS)
    }
}

impl Config {
    /// Creates a configuration for lists sorted by `order` whose length
    /// is stored in `header_bits` bits.
    pub fn new(order: Order, header_bits: u32) -> Self {
        Config { order, header_bits }
    }

    /// The sort order of lists.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// The width of the cardinality header.
    #[inline]
    pub fn header_bits(&self) -> u32 {
        self.header_bits
    }

    /// Checks that the header width is in range.
    pub fn validate(&self) -> Result<()> {
        if self.header_bits < MIN_HEADER_BITS || self.header_bits > MAX_HEADER_BITS {
            trace!("rejecting cardinality header of {} bits", self.header_bits);
            return Err(Error::CardinalityHeaderSizeOutOfBound(self.header_bits));
        }
        Ok(())
    }

    /// The largest list length the header can hold, `2^header_bits - 1`.
    pub fn max_cardinality(&self) -> u64 {
        1u64.checked_shl(self.header_bits)
            .map_or(u64::max_value(), |limit| limit - 1)
    }

    /// Checks the header width, then that a list of `len` values fits the
    /// header.
    pub fn check_len(&self, len: usize) -> Result<()> {
        self.validate()?;

        if len as u64 > self.max_cardinality() {
            trace!(
                "rejecting list of {} values for a {}-bit header",
                len,
                self.header_bits
            );
            return Err(Error::InputTooLong {
                len,
                header_bits: self.header_bits,
            });
        }
        Ok(())
    }

    /// Bytes enough to hold any `n`-value list: the header plus `n` full
    /// 32-bit fields.
    ///
    /// Returns 0 if the header width is invalid or `n` values cannot fit
    /// the header.
    pub fn max_compressed_len(&self, n: usize) -> usize {
        if self.check_len(n).is_err() {
            return 0;
        }
        size_in_bytes(u64::from(self.header_bits) + FIRST_VALUE_BITS as u64 * n as u64)
    }

    /// The exact number of bits `values` compresses to.
    pub fn compressed_bits(&self, values: &[u32]) -> Result<u64> {
        self.check_len(values.len())?;

        let len = values.len();
        let mut total = u64::from(self.header_bits);
        let mut width = FIRST_VALUE_BITS;

        for step in 0..len {
            total += width as u64;
            width = bit_len(values[self.order.index(len, step)]);
        }

        Ok(total)
    }
}

impl ListCode for Config {
    fn encode<W: BitWrite>(&self, sink: &mut W, values: &[u32]) -> Result<()> {
        compress::write_list(self, sink, values)
    }

    fn decode_into<R: BitRead>(&self, source: &mut R, values: &mut Vec<u32>) -> Result<usize> {
        decompress::read_list(self, source, values)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::*;

    #[test]
    fn order_names() {
        assert_eq!("\"ascending\"", serde_json::to_string(&Order::Ascending).unwrap());
        assert_eq!("\"descending\"", serde_json::to_string(&Order::Descending).unwrap());
        assert!(serde_json::from_str::<Order>("\"Descending\"").is_err());
    }

    #[test]
    fn config_through_json() {
        let config = Config::new(Order::Descending, 12);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(r#"{"order":"descending","header_bits":12}"#, json);
        assert_eq!(config, serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn bad_header_survives_loading() {
        let config: Config = serde_json::from_str(r#"{"order":"ascending","header_bits":40}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::CardinalityHeaderSizeOutOfBound(40))
        ));
    }
}
