use std::cmp;
use std::io::{Error, ErrorKind, Result};

use super::bytes::{get_bits, put_bits};
use crate::internal::errors::*;
use crate::stream::{BitRead, BitStream, BitWrite};
use crate::width::size_in_bytes;

/// A bit buffer can be used to read bits from or write bits to an
/// owned, growable byte vector.
///
/// Reads and writes share one position. Writing past the end grows the
/// buffer, filling new bytes with 0s.
#[derive(Clone, Debug, Default)]
pub struct BitBuffer {
    data: Vec<u8>,
    len: u64,
    pos: u64,
}

impl BitBuffer {
    /// Creates a new, empty bit buffer.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty bit buffer with the given capacity (in
    /// bits) preallocated.
    pub fn with_capacity(capacity: u64) -> Self {
        BitBuffer {
            data: Vec::with_capacity(size_in_bytes(capacity)),
            len: 0,
            pos: 0,
        }
    }

    /// Creates a new bit buffer for reading from a byte vector.
    pub fn from(input: Vec<u8>) -> Self {
        let len = input.len() as u64 * 8;
        BitBuffer {
            data: input,
            len,
            pos: 0,
        }
    }

    /// Creates a new bit buffer for appending to a byte vector.
    pub fn append(vec: Vec<u8>) -> Self {
        let len = vec.len() as u64 * 8;
        BitBuffer {
            data: vec,
            len,
            pos: len,
        }
    }

    /// Returns the bytes underlying the bit buffer. A partial last byte
    /// is padded with 0s.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// The number of bits written to or available in the buffer.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.len
    }

    /// Moves the position for the next read or write.
    pub fn seek(&mut self, position: u64) -> Result<()> {
        if position <= self.len {
            self.pos = position;
            Ok(())
        } else {
            Err(Error::new(ErrorKind::NotFound, "position out of bounds"))
        }
    }
}

impl BitStream for BitBuffer {
    #[inline]
    fn position(&self) -> u64 {
        self.pos
    }
}

impl BitRead for BitBuffer {
    fn read_bits(&mut self, nbits: usize) -> Result<Option<u64>> {
        assert!(nbits <= 64, "BitBuffer::read_bits: more than 64 bits");

        if nbits == 0 {
            return Ok(Some(0));
        }

        let remaining = self.len - self.pos;
        if remaining == 0 {
            Ok(None)
        } else if remaining < nbits as u64 {
            out_of_bits("BitBuffer::read_bits")
        } else {
            let result = get_bits(&self.data, self.pos, nbits);
            self.pos += nbits as u64;
            Ok(Some(result))
        }
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        Some(self.len - self.pos)
    }
}

impl BitWrite for BitBuffer {
    fn write_bits(&mut self, value: u64, nbits: usize) -> Result<()> {
        assert!(nbits <= 64, "BitBuffer::write_bits: more than 64 bits");

        let end = self.pos + nbits as u64;
        let nbytes = size_in_bytes(end);
        if nbytes > self.data.len() {
            self.data.resize(nbytes, 0);
        }

        put_bits(&mut self.data, self.pos, value, nbits);
        self.pos = end;
        self.len = cmp::max(self.len, end);

        Ok(())
    }
}
