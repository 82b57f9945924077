use std::io::Result;

use super::bytes::{get_bits, put_bits};
use crate::internal::errors::*;
use crate::stream::{BitRead, BitStream, BitWrite};

/// Reads bits from a borrowed byte slice.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: u64,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        BitReader { data, pos: 0 }
    }

    /// The number of bits in the underlying slice.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Returns the slice being read.
    #[inline]
    pub fn into_inner(self) -> &'a [u8] {
        self.data
    }
}

impl<'a> BitStream for BitReader<'a> {
    #[inline]
    fn position(&self) -> u64 {
        self.pos
    }
}

impl<'a> BitRead for BitReader<'a> {
    fn read_bits(&mut self, nbits: usize) -> Result<Option<u64>> {
        assert!(nbits <= 64, "BitReader::read_bits: more than 64 bits");

        if nbits == 0 {
            return Ok(Some(0));
        }

        let remaining = self.bit_len() - self.pos;
        if remaining == 0 {
            Ok(None)
        } else if remaining < nbits as u64 {
            out_of_bits("BitReader::read_bits")
        } else {
            let result = get_bits(self.data, self.pos, nbits);
            self.pos += nbits as u64;
            Ok(Some(result))
        }
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        Some(self.bit_len() - self.pos)
    }
}

/// Writes bits into a borrowed byte slice of fixed capacity.
///
/// Bits are written in place; bits of the slice past the position keep
/// whatever they held before.
#[derive(Debug)]
pub struct BitWriter<'a> {
    data: &'a mut [u8],
    pos: u64,
}

impl<'a> BitWriter<'a> {
    /// Creates a writer positioned at the first bit of `data`.
    pub fn new(data: &'a mut [u8]) -> Self {
        BitWriter { data, pos: 0 }
    }

    /// The number of bits the slice can hold.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Returns the slice being written.
    #[inline]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }
}

impl<'a> BitStream for BitWriter<'a> {
    #[inline]
    fn position(&self) -> u64 {
        self.pos
    }
}

impl<'a> BitWrite for BitWriter<'a> {
    fn write_bits(&mut self, value: u64, nbits: usize) -> Result<()> {
        assert!(nbits <= 64, "BitWriter::write_bits: more than 64 bits");

        if nbits as u64 > self.capacity() - self.pos {
            return out_of_space("BitWriter::write_bits");
        }

        put_bits(self.data, self.pos, value, nbits);
        self.pos += nbits as u64;
        Ok(())
    }

    #[inline]
    fn room(&self) -> Option<u64> {
        Some(self.capacity() - self.pos)
    }
}
