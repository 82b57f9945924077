use crate::errors::Result;
use crate::stream::*;

/// A code for whole lists of `u32`.
///
/// Encoded lists are self-delimiting, so several can share one stream.
pub trait ListCode {
    /// Writes `values` to `sink`.
    fn encode<W: BitWrite>(&self, sink: &mut W, values: &[u32]) -> Result<()>;

    /// Reads one list from `source` into `values`, replacing its contents,
    /// and returns the number of values read.
    ///
    /// On error `values` holds no meaningful list.
    fn decode_into<R: BitRead>(&self, source: &mut R, values: &mut Vec<u32>) -> Result<usize>;

    /// Reads one list from `source`.
    fn decode<R: BitRead>(&self, source: &mut R) -> Result<Vec<u32>> {
        let mut values = Vec::new();
        self.decode_into(source, &mut values)?;
        Ok(values)
    }
}
