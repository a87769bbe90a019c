use super::BitStream;

/// Bit-level reader over a packed [`BitStream`]
///
/// Yields bits MSB-first within each byte and stops at the stream's exact
/// bit count, so the zero padding in the final byte is never surfaced.
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: u64,
    /// Next bit to yield
    pos: u64,
}

impl<'a> BitReader<'a> {
    pub fn new(stream: &'a BitStream) -> Self {
        Self { bytes: stream.as_bytes(), bit_len: stream.bit_len(), pos: 0 }
    }

    /// Read the next bit, or `None` once the stream is exhausted
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.pos >= self.bit_len {
            return None;
        }
        let byte = self.bytes[(self.pos / 8) as usize];
        let bit = (byte >> (7 - (self.pos % 8))) & 1;
        self.pos += 1;
        Some(bit != 0)
    }

    /// Number of bits consumed so far
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Number of bits left to read
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.pos
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}
