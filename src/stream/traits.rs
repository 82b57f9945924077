use std::io::Result;

use num_traits::{PrimInt, Unsigned};

use crate::internal::errors::*;

/// Something with a position measured in bits.
pub trait BitStream {
    /// The position in the stream, from the beginning, in bits.
    fn position(&self) -> u64;
}

/// Allows reading bits from a source.
pub trait BitRead: BitStream {
    /// Reads the next `nbits` bits as an unsigned integer, least-significant
    /// bit first.
    ///
    /// `Ok(None)` indicates (benign) EOF: the source had no bits left at
    /// all. Running out partway through the field is an error of kind
    /// `UnexpectedEof`, and consumes nothing. Reading 0 bits always
    /// yields `Some(0)`.
    ///
    /// # Panics
    ///
    /// Panics if `nbits > 64`.
    fn read_bits(&mut self, nbits: usize) -> Result<Option<u64>>;

    /// The number of bits left to read, if the source knows it.
    fn remaining(&self) -> Option<u64> {
        None
    }

    /// Reads a single bit from the source.
    fn read_bit(&mut self) -> Result<Option<bool>> {
        Ok(self.read_bits(1)?.map(|bit| bit == 1))
    }

    /// Reads an unsigned integer of `nbits` into a particular type.
    fn read_int<N: PrimInt + Unsigned>(&mut self, nbits: usize) -> Result<Option<N>> {
        match self.read_bits(nbits)? {
            Some(value) => match N::from(value) {
                Some(result) => Ok(Some(result)),
                None => too_many_bits("BitRead::read_int"),
            },
            None => Ok(None),
        }
    }
}

/// Allows writing bits to a sink.
pub trait BitWrite: BitStream {
    /// Writes the low `nbits` bits of `value`, least-significant bit first.
    /// Higher bits of `value` are ignored.
    ///
    /// A sink without room for all `nbits` fails with `WriteZero` and
    /// writes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `nbits > 64`.
    fn write_bits(&mut self, value: u64, nbits: usize) -> Result<()>;

    /// The number of bits that can still be written, if the sink is
    /// bounded. Growable sinks return `None`.
    fn room(&self) -> Option<u64> {
        None
    }

    /// Writes a single bit to the sink.
    fn write_bit(&mut self, value: bool) -> Result<()> {
        self.write_bits(value as u64, 1)
    }

    /// Writes 0s until the position is a whole number of bytes.
    fn pad_to_byte(&mut self) -> Result<()> {
        let partial = (self.position() % 8) as usize;
        if partial == 0 {
            Ok(())
        } else {
            self.write_bits(0, 8 - partial)
        }
    }
}
