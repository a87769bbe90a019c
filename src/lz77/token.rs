use crate::error::{Error, Result};

/// A single LZ77 token: copy `length` bytes from `offset` bytes back,
/// then append the literal `next`.
///
/// `offset == 0 && length == 0` is a pure literal (no backward copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Backward distance from the decompression cursor to the match start
    pub offset: u16,
    /// Number of bytes copied from the match
    pub length: u8,
    /// Literal byte appended after the copied run
    pub next: u8,
}

impl Token {
    /// Size of one serialized token record in bytes
    pub const SERIALIZED_SIZE: usize = 4;

    pub fn literal(next: u8) -> Self {
        Self { offset: 0, length: 0, next }
    }

    pub fn is_literal(&self) -> bool {
        self.offset == 0 && self.length == 0
    }

    /// Uncompressed bytes this token reconstructs (match run + literal)
    pub fn uncompressed_size(&self) -> usize {
        self.length as usize + 1
    }

    /// Serialize as a fixed 4-byte record: offset (u16 LE), length, next
    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_SIZE] {
        let mut buf = [0u8; Self::SERIALIZED_SIZE];
        buf[0..2].copy_from_slice(&self.offset.to_le_bytes());
        buf[2] = self.length;
        buf[3] = self.next;
        buf
    }

    pub fn from_bytes(buf: &[u8; Self::SERIALIZED_SIZE]) -> Self {
        Self { offset: u16::from_le_bytes([buf[0], buf[1]]), length: buf[2], next: buf[3] }
    }

    /// Parse a byte slice into tokens; the slice must be a whole number
    /// of 4-byte records.
    pub fn parse_stream(bytes: &[u8]) -> Result<Vec<Token>> {
        if bytes.len() % Self::SERIALIZED_SIZE != 0 {
            return Err(Error::TruncatedTokenStream {
                len: bytes.len(),
                record: Self::SERIALIZED_SIZE,
            });
        }
        Ok(bytes
            .chunks_exact(Self::SERIALIZED_SIZE)
            .map(|chunk| {
                let mut buf = [0u8; Self::SERIALIZED_SIZE];
                buf.copy_from_slice(chunk);
                Token::from_bytes(&buf)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_round_trip() {
        let token = Token { offset: 0x1234, length: 7, next: b'x' };
        let bytes = token.to_bytes();
        assert_eq!(bytes, [0x34, 0x12, 7, b'x']);
        assert_eq!(Token::from_bytes(&bytes), token);
    }

    #[test]
    fn test_literal_token() {
        let token = Token::literal(b'a');
        assert!(token.is_literal());
        assert_eq!(token.uncompressed_size(), 1);
    }

    #[test]
    fn test_parse_stream() {
        let tokens = vec![Token::literal(b'a'), Token { offset: 1, length: 3, next: b'b' }];
        let bytes: Vec<u8> = tokens.iter().flat_map(|t| t.to_bytes()).collect();
        assert_eq!(Token::parse_stream(&bytes).unwrap(), tokens);
    }

    #[test]
    fn test_parse_stream_truncated() {
        let err = Token::parse_stream(&[0, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::TruncatedTokenStream { len: 3, record: 4 }));
    }
}
