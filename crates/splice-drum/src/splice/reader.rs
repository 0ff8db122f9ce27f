//! Bounds-checked cursor over a `.splice` buffer.

use byteorder::{ByteOrder, LittleEndian};

/// A read that would cross the current limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shortfall {
    pub offset: usize,
    pub needed: usize,
    pub available: usize,
}

/// Forward-only reader. Every read is checked against `limit`, which starts at the
/// end of the buffer and can be narrowed to the declared payload end.
#[derive(Debug)]
pub(crate) struct SpliceReader<'a> {
    data: &'a [u8],
    offset: usize,
    limit: usize,
}

impl<'a> SpliceReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            limit: data.len(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.offset
    }

    pub fn at_limit(&self) -> bool {
        self.offset >= self.limit
    }

    /// Narrow the readable region to `offset() + len`. Callers check `len <= remaining()`.
    pub fn restrict(&mut self, len: usize) {
        debug_assert!(len <= self.remaining());
        self.limit = self.offset + len.min(self.remaining());
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Shortfall> {
        if n > self.remaining() {
            return Err(Shortfall {
                offset: self.offset,
                needed: n,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + n];
        self.offset += n;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Shortfall> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), Shortfall> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, Shortfall> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_f32_le(&mut self) -> Result<f32, Shortfall> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_offset() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let mut reader = SpliceReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.read_bytes(2).unwrap(), &[2, 3]);
        assert_eq!(reader.offset(), 3);
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn test_read_past_end_fails_without_advancing() {
        let data = [0u8; 3];
        let mut reader = SpliceReader::new(&data);
        reader.skip(2).unwrap();
        let err = reader.read_bytes(4).unwrap_err();
        assert_eq!(
            err,
            Shortfall {
                offset: 2,
                needed: 4,
                available: 1
            }
        );
        assert_eq!(reader.offset(), 2);
    }

    #[test]
    fn test_restrict_bounds_reads() {
        let data = [0u8; 10];
        let mut reader = SpliceReader::new(&data);
        reader.skip(2).unwrap();
        reader.restrict(3);
        assert_eq!(reader.remaining(), 3);
        assert!(reader.read_bytes(4).is_err());
        reader.skip(3).unwrap();
        assert!(reader.at_limit());
    }

    #[test]
    fn test_read_f32_le() {
        let data = 98.4f32.to_le_bytes();
        let mut reader = SpliceReader::new(&data);
        assert_eq!(reader.read_f32_le().unwrap().to_bits(), 98.4f32.to_bits());
    }
}
