// Little-endian bit access into byte slices. Callers check bounds.

use std::cmp;

use byteorder::{ByteOrder, LittleEndian};

use crate::width::low_mask;

/// Gets `nbits` bits starting at bit `start`. Bit `i` of a byte slice is
/// bit `i % 8` of byte `i / 8`, and the first bit read is the least
/// significant bit of the result.
pub fn get_bits(data: &[u8], start: u64, nbits: usize) -> u64 {
    debug_assert!(nbits <= 64);
    debug_assert!(start + nbits as u64 <= data.len() as u64 * 8);

    if nbits == 0 {
        return 0;
    }

    let index = (start / 8) as usize;
    let offset = (start % 8) as usize;

    if offset + nbits <= 64 && index + 8 <= data.len() {
        let word = LittleEndian::read_u64(&data[index..]);
        return (word >> offset) & low_mask(nbits);
    }

    let mut result = 0u64;
    let mut position = start;
    let mut done = 0;

    while done < nbits {
        let byte = data[(position / 8) as usize];
        let offset = (position % 8) as usize;
        let take = cmp::min(8 - offset, nbits - done);
        let chunk = (byte >> offset) as u64 & low_mask(take);

        result |= chunk << done;
        position += take as u64;
        done += take;
    }

    result
}

/// Stores the low `nbits` bits of `value` starting at bit `start`, in the
/// layout read by `get_bits`. Bits outside the field are left alone.
pub fn put_bits(data: &mut [u8], start: u64, value: u64, nbits: usize) {
    debug_assert!(nbits <= 64);
    debug_assert!(start + nbits as u64 <= data.len() as u64 * 8);

    if nbits == 0 {
        return;
    }

    let value = value & low_mask(nbits);
    let index = (start / 8) as usize;
    let offset = (start % 8) as usize;

    if offset + nbits <= 64 && index + 8 <= data.len() {
        let mask = low_mask(nbits) << offset;
        let word = LittleEndian::read_u64(&data[index..]);
        LittleEndian::write_u64(&mut data[index..], (word & !mask) | (value << offset));
        return;
    }

    let mut position = start;
    let mut done = 0;

    while done < nbits {
        let index = (position / 8) as usize;
        let offset = (position % 8) as usize;
        let take = cmp::min(8 - offset, nbits - done);
        let chunk = ((value >> done) & low_mask(take)) as u8;
        let mask = (low_mask(take) as u8) << offset;

        data[index] = (data[index] & !mask) | (chunk << offset);
        position += take as u64;
        done += take;
    }
}
