pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

use crate::error::{Error, Result};

/// A packed bit sequence with an exact bit count.
///
/// Bits are packed MSB-first; the final byte is zero-padded on the low
/// end when `bit_len` is not a multiple of 8. Carrying `bit_len` lets a
/// decoder stop exactly at the last real bit instead of guessing where
/// padding begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitStream {
    /// An empty stream (zero bits).
    pub fn empty() -> Self {
        Self { bytes: Vec::new(), bit_len: 0 }
    }

    /// Reassemble a stream from packed bytes and an exact bit count.
    ///
    /// Fails if the byte count disagrees with `bit_len`. The addition is
    /// checked: `bit_len` may come from an untrusted header and must not
    /// wrap into a plausible byte count.
    pub fn from_parts(bytes: Vec<u8>, bit_len: u64) -> Result<Self> {
        match bit_len.checked_add(7) {
            Some(v) if v / 8 == bytes.len() as u64 => Ok(Self { bytes, bit_len }),
            _ => Err(Error::BitLengthMismatch { bit_len, found: bytes.len() }),
        }
    }

    pub(crate) fn from_raw(bytes: Vec<u8>, bit_len: u64) -> Self {
        debug_assert_eq!(bytes.len() as u64, (bit_len + 7) / 8);
        Self { bytes, bit_len }
    }

    /// The packed bytes, including the zero-padded tail of the final byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of meaningful bits (excludes padding).
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Consume the stream, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_valid() {
        let stream = BitStream::from_parts(vec![0b1010_0000], 4).unwrap();
        assert_eq!(stream.bit_len(), 4);
        assert_eq!(stream.as_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        let err = BitStream::from_parts(vec![0, 0], 4).unwrap_err();
        assert!(matches!(err, Error::BitLengthMismatch { bit_len: 4, found: 2 }));
    }

    #[test]
    fn test_from_parts_bit_len_near_u64_max() {
        let err = BitStream::from_parts(Vec::new(), u64::MAX).unwrap_err();
        assert!(matches!(err, Error::BitLengthMismatch { bit_len: u64::MAX, found: 0 }));
    }

    #[test]
    fn test_empty() {
        let stream = BitStream::empty();
        assert!(stream.is_empty());
        assert_eq!(stream.as_bytes().len(), 0);
    }
}
