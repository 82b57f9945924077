//! Bit-oriented streams for coding.
//!
//! All streams here pack bits little-endian: the first bit written lands
//! in the low bit of the first byte, an integer field is laid down from
//! its least-significant bit up, and a field that crosses a byte boundary
//! continues in the low bits of the next byte.

mod traits;
pub use self::traits::*;

mod bytes;

mod slice;
pub use self::slice::*;

mod bit_buffer;
pub use self::bit_buffer::*;
