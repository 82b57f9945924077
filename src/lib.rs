//! Compression for sorted lists of `u32`.
//!
//! A sorted list is written largest value first. Every value after the
//! first is then bounded by the one written before it, so its field only
//! needs as many bits as its predecessor has. No widths are stored: the
//! decoder recovers each width from the value it just read.
//!
//! So far we have:
//!
//!   - [a compressor](coding/struct.Compressor.html) and [a
//!     decompressor](coding/struct.Decompressor.html) working on byte
//!     buffers,
//!   - the [`ListCode`](coding/trait.ListCode.html) trait for writing lists
//!     into any bit stream, and
//!   - MSB-first [bit streams](stream/index.html) over borrowed and owned
//!     bytes.
//!
//! # Usage
//!
//! ```rust
//! use simple_intlist::coding::{Compressor, Decompressor, Order};
//!
//! let compressor = Compressor::new(Order::Ascending, 8);
//! let mut buffer = vec![0; compressor.max_compressed_len(3)];
//! let bits = compressor.compress(&[5, 111, 8888], &mut buffer).unwrap();
//! assert_eq!(61, bits);
//!
//! let decompressor = Decompressor::new(Order::Ascending, 8);
//! assert_eq!(vec![5, 111, 8888], decompressor.decompress(&buffer).unwrap());
//! ```

#![warn(missing_docs)]

mod internal;

pub mod errors;
pub use errors::{Error, Result};

pub mod width;
pub use width::bit_len;

pub mod stream;
pub use stream::{BitBuffer, BitReader, BitWriter};

pub mod coding;
pub use coding::{Compressor, Config, Decompressor, ListCode, Order};
