use log::debug;

use super::{Config, ListCode, Order, FIRST_VALUE_BITS};
use crate::errors::{Error, Result};
use crate::stream::{BitStream, BitWrite, BitWriter};
use crate::width::{bit_len, size_in_bytes};

/// Compresses sorted lists into byte buffers.
///
/// Holds only its configuration, so one compressor can serve any number
/// of calls, from any number of threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compressor {
    config: Config,
}

impl Compressor {
    /// Creates a compressor for lists sorted by `order`, storing lengths in
    /// `header_bits` bits.
    pub fn new(order: Order, header_bits: u32) -> Self {
        Compressor::with_config(Config::new(order, header_bits))
    }

    /// Creates a compressor from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Compressor { config }
    }

    /// The compressor's configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The sort order expected of input lists.
    #[inline]
    pub fn order(&self) -> Order {
        self.config.order()
    }

    /// The width of the cardinality header.
    #[inline]
    pub fn header_bits(&self) -> u32 {
        self.config.header_bits()
    }

    /// An upper bound on the compressed size of an `n`-value list, in
    /// bytes. Suitable for sizing the output of `compress`.
    ///
    /// Returns 0 when the configuration cannot compress `n` values at all.
    pub fn max_compressed_len(&self, n: usize) -> usize {
        self.config.max_compressed_len(n)
    }

    /// The exact compressed size of `input`, in bits.
    pub fn compressed_bits(&self, input: &[u32]) -> Result<u64> {
        self.config.compressed_bits(input)
    }

    /// Compresses `input` into the front of `output` and returns the number
    /// of bits used.
    ///
    /// Unused bits of the last byte written are set to 0. Bytes after it
    /// are not touched. On error nothing is written.
    ///
    /// `input` must be sorted in the configured order. This is only checked
    /// in debug builds; otherwise an unsorted list silently compresses to
    /// garbage.
    ///
    /// # Errors
    ///
    ///   - `CardinalityHeaderSizeOutOfBound` if the header width is not in
    ///     `1..=32`;
    ///   - `InputTooLong` if `input.len()` does not fit the header;
    ///   - `OutputTooSmall` if `output` cannot hold the result.
    pub fn compress(&self, input: &[u32], output: &mut [u8]) -> Result<u64> {
        let mut writer = BitWriter::new(output);
        self.config.encode(&mut writer, input)?;
        let needed_bits = writer.position();
        writer.pad_to_byte()?;

        debug!(
            "compressed {} values into {} bits ({} bytes)",
            input.len(),
            needed_bits,
            size_in_bytes(needed_bits)
        );

        Ok(needed_bits)
    }

    /// Compresses `input` into a freshly allocated buffer of exactly the
    /// needed size.
    pub fn compress_to_vec(&self, input: &[u32]) -> Result<Vec<u8>> {
        let bits = self.config.compressed_bits(input)?;
        let mut output = vec![0; size_in_bytes(bits)];
        self.compress(input, &mut output)?;
        Ok(output)
    }
}

/// Writes the header, then every value in traversal order.
pub(super) fn write_list<W: BitWrite>(config: &Config, sink: &mut W, values: &[u32]) -> Result<()> {
    config.check_len(values.len())?;
    debug_assert!(
        config.order().is_sorted(values),
        "list is not sorted {:?}",
        config.order()
    );

    // A bounded sink is checked up front so a list that does not fit
    // leaves it untouched.
    if let Some(available_bits) = sink.room() {
        let needed_bits = config.compressed_bits(values)?;
        if needed_bits > available_bits {
            return Err(Error::OutputTooSmall {
                needed_bits,
                available_bits,
            });
        }
    }

    let len = values.len();
    sink.write_bits(len as u64, config.header_bits() as usize)?;

    let mut width = FIRST_VALUE_BITS;
    for step in 0..len {
        let value = values[config.order().index(len, step)];
        sink.write_bits(u64::from(value), width)?;
        width = bit_len(value);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coding::properties;
    use crate::stream::BitBuffer;
    use quickcheck_macros::quickcheck;

    fn compress(compressor: &Compressor, input: &[u32]) -> Result<(u64, Vec<u8>)> {
        let mut output = vec![0; compressor.max_compressed_len(input.len())];
        let bits = compressor.compress(input, &mut output)?;
        output.truncate(size_in_bytes(bits));
        Ok((bits, output))
    }

    #[test]
    fn new_compressor() {
        let compressor = Compressor::new(Order::Ascending, 10);
        assert_eq!(Order::Ascending, compressor.order());
        assert_eq!(10, compressor.header_bits());
        assert_eq!(Config::new(Order::Ascending, 10), *compressor.config());
    }

    #[test]
    fn known_outputs() {
        let cases: &[(Order, u32, &[u32], u64, &[u8])] = &[
            (Order::Descending, 8, &[], 8, &[0x00]),
            (Order::Descending, 8, &[8888], 40, &[0x01, 0xb8, 0x22, 0x00, 0x00]),
            (Order::Ascending, 8, &[8888], 40, &[0x01, 0xb8, 0x22, 0x00, 0x00]),
            (
                Order::Descending,
                8,
                &[8888, 111, 5],
                61,
                &[0x03, 0xb8, 0x22, 0x00, 0x00, 0x6f, 0x40, 0x01],
            ),
            (
                Order::Ascending,
                8,
                &[5, 111, 8888],
                61,
                &[0x03, 0xb8, 0x22, 0x00, 0x00, 0x6f, 0x40, 0x01],
            ),
        ];

        for &(order, bits, input, expected_bits, expected) in cases {
            let (n, output) = compress(&Compressor::new(order, bits), input).unwrap();
            assert_eq!(expected_bits, n);
            assert_eq!(expected, &output[..]);
        }
    }

    #[test]
    fn bad_header() {
        for &bits in &[0, 33] {
            let compressor = Compressor::new(Order::Descending, bits);
            let mut output = [0xaa; 8];
            match compressor.compress(&[], &mut output) {
                Err(Error::CardinalityHeaderSizeOutOfBound(n)) => assert_eq!(bits, n),
                other => panic!("unexpected: {:?}", other),
            }
            assert_eq!([0xaa; 8], output);
        }
    }

    #[test]
    fn too_long() {
        let cases: &[(u32, &[u32])] = &[(2, &[1, 2, 3, 4]), (3, &[1, 2, 3, 4, 5, 6, 7, 8])];

        for &(bits, input) in cases {
            let compressor = Compressor::new(Order::Ascending, bits);
            let mut output = [0xaa; 64];
            assert!(matches!(
                compressor.compress(input, &mut output),
                Err(Error::InputTooLong { .. })
            ));
            assert!(output.iter().all(|&byte| byte == 0xaa));
        }
    }

    #[test]
    fn output_too_small() {
        let compressor = Compressor::new(Order::Descending, 8);
        let mut output = [0xaa; 7];
        match compressor.compress(&[8888, 111, 5], &mut output) {
            Err(Error::OutputTooSmall {
                needed_bits,
                available_bits,
            }) => {
                assert_eq!(61, needed_bits);
                assert_eq!(56, available_bits);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!([0xaa; 7], output);
    }

    #[test]
    fn encode_into_short_writer_writes_nothing() {
        let config = Config::new(Order::Descending, 8);
        let mut data = [0xaa; 3];
        {
            let mut writer = BitWriter::new(&mut data);
            match config.encode(&mut writer, &[8888, 111, 5]) {
                Err(Error::OutputTooSmall {
                    needed_bits,
                    available_bits,
                }) => {
                    assert_eq!(61, needed_bits);
                    assert_eq!(24, available_bits);
                }
                other => panic!("unexpected: {:?}", other),
            }
            assert_eq!(0, writer.position());
        }
        assert_eq!([0xaa; 3], data);
    }

    #[test]
    fn encode_after_other_fields_counts_what_is_left() {
        let config = Config::new(Order::Descending, 8);
        let mut data = [0xaa; 8];
        let mut writer = BitWriter::new(&mut data);
        writer.write_bits(0, 4).unwrap();

        match config.encode(&mut writer, &[8888, 111, 5]) {
            Err(Error::OutputTooSmall {
                needed_bits,
                available_bits,
            }) => {
                assert_eq!(61, needed_bits);
                assert_eq!(60, available_bits);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(4, writer.position());

        let mut data = [0xaa; 8];
        let mut writer = BitWriter::new(&mut data);
        writer.write_bits(0, 3).unwrap();
        config.encode(&mut writer, &[8888, 111, 5]).unwrap();
        assert_eq!(64, writer.position());
    }

    #[test]
    fn pads_last_byte_and_leaves_the_rest() {
        let compressor = Compressor::new(Order::Descending, 8);
        let mut output = [0xff; 10];
        assert_eq!(61, compressor.compress(&[8888, 111, 5], &mut output).unwrap());
        assert_eq!(
            [0x03, 0xb8, 0x22, 0x00, 0x00, 0x6f, 0x40, 0x01, 0xff, 0xff],
            output
        );
    }

    #[test]
    fn empty_list_is_all_zero_header() {
        for bits in 1..=32 {
            let compressor = Compressor::new(Order::Ascending, bits);
            let output = compressor.compress_to_vec(&[]).unwrap();
            assert_eq!(size_in_bytes(u64::from(bits)), output.len());
            assert!(output.iter().all(|&byte| byte == 0));
        }
    }

    #[test]
    fn zeros_take_one_bit() {
        let compressor = Compressor::new(Order::Ascending, 4);
        let (bits, output) = compress(&compressor, &[0, 0, 1]).unwrap();
        assert_eq!(4 + 32 + 1 + 1, bits);
        // header 3, then 1 in 32 bits, then two 1-bit zeros
        assert_eq!(vec![0x13, 0x00, 0x00, 0x00, 0x00], output);
    }

    #[test]
    fn lists_share_a_stream() {
        let config = Config::new(Order::Descending, 8);
        let mut buffer = BitBuffer::new();
        config.encode(&mut buffer, &[8888, 111, 5]).unwrap();
        config.encode(&mut buffer, &[7]).unwrap();
        assert_eq!(61 + 40, buffer.bit_len());

        buffer.seek(0).unwrap();
        assert_eq!(vec![8888, 111, 5], config.decode(&mut buffer).unwrap());
        assert_eq!(vec![7], config.decode(&mut buffer).unwrap());
    }

    #[quickcheck]
    fn qc_fits_max_compressed_len(descending: bool, seed: u8, values: Vec<u32>) -> bool {
        let order = if descending { Order::Descending } else { Order::Ascending };
        let compressor = Compressor::new(order, properties::header_bits(seed));
        let values = properties::sorted_for(compressor.config(), values);

        let bits = compressor.compressed_bits(&values).unwrap();
        let output = compressor.compress_to_vec(&values).unwrap();
        size_in_bytes(bits) == output.len()
            && output.len() <= compressor.max_compressed_len(values.len())
    }

    #[quickcheck]
    fn qc_too_long_iff_over_header(seed: u8, len: u16) -> bool {
        let bits = properties::header_bits(seed) % 12 + 1;
        let compressor = Compressor::new(Order::Ascending, bits);
        let values = vec![0; len as usize % 5000];

        let rejected = matches!(
            compressor.compressed_bits(&values),
            Err(Error::InputTooLong { .. })
        );
        rejected == (values.len() as u64 >= 1 << bits)
    }
}
