use simple_intlist::coding::{Compressor, Decompressor, Order};

fn main() {
    afl::fuzz!(|data: &[u8]| {
        if data.is_empty() {
            return;
        }

        // First byte picks the configuration, the rest is the payload.
        let order = if data[0] & 0x80 == 0 {
            Order::Ascending
        } else {
            Order::Descending
        };
        let header_bits = u32::from(data[0] & 0x1f) + 1;
        let input = &data[1..];

        let decompressor = Decompressor::new(order, header_bits);
        let values = match decompressor.decompress(input) {
            Ok(values) => values,
            Err(_) => return,
        };

        if !order.is_sorted(&values) {
            return;
        }

        let compressor = Compressor::new(order, header_bits);
        let bits = compressor.compressed_bits(&values).unwrap();
        let output = compressor.compress_to_vec(&values).unwrap();
        assert!(output.len() <= input.len());
        assert_eq!(values, decompressor.decompress(&output).unwrap());

        // The re-encoded stream matches the input bit for bit, up to the
        // padding.
        let whole = (bits / 8) as usize;
        assert_eq!(&input[..whole], &output[..whole]);
    });
}
