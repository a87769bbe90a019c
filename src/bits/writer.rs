use super::BitStream;

/// Bit-level writer for Huffman output
///
/// Writes bits MSB-first within each byte; the final partial byte is
/// left-shifted so padding occupies the low-order bits.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
    /// Total bits written
    bit_len: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0, bit_len: 0 }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current_byte = (self.current_byte << 1) | (bit as u8);
        self.bits_in_byte += 1;
        self.bit_len += 1;

        if self.bits_in_byte == 8 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write the low `n` bits (0-32) of `value`, MSB-first
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= 32);
        for shift in (0..n).rev() {
            self.write_bit((value >> shift) & 1 != 0);
        }
    }

    /// Total bits written so far
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Finish, zero-padding the final partial byte, and return the stream
    pub fn finish(mut self) -> BitStream {
        if self.bits_in_byte > 0 {
            self.current_byte <<= 8 - self.bits_in_byte;
            self.output.push(self.current_byte);
        }
        BitStream::from_raw(self.output, self.bit_len)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bits_msb_first() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b110, 3);
        writer.write_bits(0b10011, 5);
        let stream = writer.finish();
        assert_eq!(stream.as_bytes(), &[0b1101_0011]);
        assert_eq!(stream.bit_len(), 8);
    }

    #[test]
    fn test_partial_byte_padded_low() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        writer.write_bit(false);
        writer.write_bit(true);
        let stream = writer.finish();
        // 101 shifted left to fill the byte: 1010_0000
        assert_eq!(stream.as_bytes(), &[0b1010_0000]);
        assert_eq!(stream.bit_len(), 3);
    }

    #[test]
    fn test_cross_byte() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFFF, 12);
        let stream = writer.finish();
        assert_eq!(stream.as_bytes(), &[0xFF, 0xF0]);
        assert_eq!(stream.bit_len(), 12);
    }

    #[test]
    fn test_empty_writer() {
        let stream = BitWriter::new().finish();
        assert!(stream.is_empty());
    }
}
