//! Bit widths of values and sizes of bit strings.

use num_traits::{PrimInt, Unsigned};

/// The number of bits needed to represent `value`, with a floor of 1.
///
/// This is the 1-based position of the highest set bit, so
/// `floor(log2(value)) + 1` for nonzero `value`. Zero still gets a
/// one-bit field: width 0 never occurs.
///
/// ```
/// use simple_intlist::bit_len;
///
/// assert_eq!(1, bit_len(0u32));
/// assert_eq!(1, bit_len(1u32));
/// assert_eq!(14, bit_len(8888u32));
/// assert_eq!(32, bit_len(u32::max_value()));
/// ```
#[inline]
pub fn bit_len<N: PrimInt + Unsigned>(value: N) -> usize {
    let nbits = N::zero().count_zeros();
    let len = (nbits - value.leading_zeros()) as usize;
    if len == 0 {
        1
    } else {
        len
    }
}

/// The number of bytes needed to hold `bits` bits.
#[inline]
pub fn size_in_bytes(bits: u64) -> usize {
    ((bits + 7) / 8) as usize
}

/// The mask with the lowest `nbits` bits set.
///
/// # Precondition
///
/// `nbits <= 64`
#[inline]
pub fn low_mask(nbits: usize) -> u64 {
    debug_assert!(nbits <= 64);

    if nbits >= 64 {
        !0
    } else {
        (1 << nbits) - 1
    }
}
