//! Self-contained on-disk containers for both codecs.
//!
//! The algorithmic core persists neither the Huffman tree nor the bit
//! padding; these frames close that gap so a decoder needs nothing but
//! the frame bytes. Both layouts are little-endian throughout.
//!
//! Huffman frame (`MPHF`):
//!
//! ```text
//! magic       4 bytes  "MPHF"
//! decoded_len u64      original byte count
//! bit_len     u64      exact payload bit count (excludes padding)
//! crc32       u32      CRC32 of the original bytes
//! entry_count u16      distinct symbols (1-256)
//! entries     entry_count x { byte: u8, count: u64 }, ascending byte order
//! payload     ceil(bit_len / 8) bytes, MSB-first packed codes
//! ```
//!
//! The decoder rebuilds the frequency table from the entries; tree
//! construction is deterministic, so it recovers the encoder's exact
//! tree and codes.
//!
//! LZ77 frame (`MPLZ`):
//!
//! ```text
//! magic       4 bytes  "MPLZ"
//! decoded_len u64      original byte count
//! crc32       u32      CRC32 of the original bytes
//! window_size u16      window used at encode time (informational)
//! token_count u32      number of 4-byte token records
//! tokens      token_count x { offset: u16, length: u8, next: u8 }
//! ```

use crate::bits::BitStream;
use crate::error::{Error, Result};
use crate::huffman::{self, FrequencyTable, HuffmanTree};
use crate::lz77::{self, Token};

pub const HUFFMAN_MAGIC: [u8; 4] = *b"MPHF";
pub const LZ77_MAGIC: [u8; 4] = *b"MPLZ";

/// Which codec produced a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Huffman,
    Lz77,
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Codec::Huffman => write!(f, "huffman"),
            Codec::Lz77 => write!(f, "lz77"),
        }
    }
}

/// Identify a frame by its magic bytes
pub fn detect(frame: &[u8]) -> Option<Codec> {
    if frame.starts_with(&HUFFMAN_MAGIC) {
        Some(Codec::Huffman)
    } else if frame.starts_with(&LZ77_MAGIC) {
        Some(Codec::Lz77)
    } else {
        None
    }
}

/// Header summary of a frame, for inspection without decoding
#[derive(Clone, Debug)]
pub struct FrameInfo {
    pub codec: Codec,
    pub decoded_len: u64,
    pub detail: CodecDetail,
}

#[derive(Clone, Debug)]
pub enum CodecDetail {
    Huffman { bit_len: u64, distinct_symbols: u16 },
    Lz77 { token_count: u32, window_size: u16 },
}

/// Compress to a self-contained Huffman frame
pub fn compress_huffman(input: &[u8]) -> Result<Vec<u8>> {
    let encoded = huffman::encode(input)?;
    let stream = &encoded.stream;

    let mut out = Vec::with_capacity(26 + encoded.frequencies.len() * 9 + stream.as_bytes().len());
    out.extend_from_slice(&HUFFMAN_MAGIC);
    out.extend_from_slice(&(input.len() as u64).to_le_bytes());
    out.extend_from_slice(&stream.bit_len().to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(input).to_le_bytes());
    out.extend_from_slice(&(encoded.frequencies.len() as u16).to_le_bytes());
    for (byte, count) in encoded.frequencies.iter() {
        out.push(byte);
        out.extend_from_slice(&count.to_le_bytes());
    }
    out.extend_from_slice(stream.as_bytes());
    Ok(out)
}

/// Decompress a Huffman frame back to the original bytes
pub fn decompress_huffman(frame: &[u8]) -> Result<Vec<u8>> {
    let mut rdr = ByteReader::new(frame);
    rdr.expect_magic(HUFFMAN_MAGIC)?;

    let decoded_len = rdr.read_u64_le()?;
    let bit_len = rdr.read_u64_le()?;
    let crc = rdr.read_u32_le()?;
    let entry_count = rdr.read_u16_le()?;

    let mut entries = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        let byte = rdr.read_u8()?;
        let count = rdr.read_u64_le()?;
        entries.push((byte, count));
    }

    let table = FrequencyTable::from_entries(entries)?;
    if table.total() != decoded_len {
        return Err(Error::TreeMismatch { expected: decoded_len, found: table.total() });
    }

    // bit_len is untrusted; bound it by the bytes left in the frame
    // before the cast so a hostile header cannot wrap the byte count.
    let payload_len = match bit_len.checked_add(7) {
        Some(v) => v / 8,
        None => return Err(Error::UnexpectedEof),
    };
    if payload_len > rdr.remaining() as u64 {
        return Err(Error::UnexpectedEof);
    }
    let payload = rdr.read_exact(payload_len as usize)?;
    let stream = BitStream::from_parts(payload.to_vec(), bit_len)?;

    let tree = HuffmanTree::build(&table)?;
    let decoded = huffman::decode(&tree, &stream)?;

    if decoded.len() as u64 != decoded_len {
        return Err(Error::TreeMismatch { expected: decoded_len, found: decoded.len() as u64 });
    }
    let found = crc32fast::hash(&decoded);
    if found != crc {
        return Err(Error::Crc32Mismatch { expected: crc, found });
    }

    Ok(decoded)
}

/// Compress to a self-contained LZ77 frame
pub fn compress_lz77(input: &[u8], window_size: usize) -> Result<Vec<u8>> {
    let tokens = lz77::encode(input, window_size)?;

    let mut out = Vec::with_capacity(22 + tokens.len() * Token::SERIALIZED_SIZE);
    out.extend_from_slice(&LZ77_MAGIC);
    out.extend_from_slice(&(input.len() as u64).to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(input).to_le_bytes());
    out.extend_from_slice(&(window_size as u16).to_le_bytes());
    out.extend_from_slice(&(tokens.len() as u32).to_le_bytes());
    for token in &tokens {
        out.extend_from_slice(&token.to_bytes());
    }
    Ok(out)
}

/// Decompress an LZ77 frame back to the original bytes
pub fn decompress_lz77(frame: &[u8]) -> Result<Vec<u8>> {
    let mut rdr = ByteReader::new(frame);
    rdr.expect_magic(LZ77_MAGIC)?;

    let decoded_len = rdr.read_u64_le()?;
    let crc = rdr.read_u32_le()?;
    let _window_size = rdr.read_u16_le()?;
    let token_count = rdr.read_u32_le()?;

    let record_len = token_count as u64 * Token::SERIALIZED_SIZE as u64;
    if record_len > rdr.remaining() as u64 {
        return Err(Error::UnexpectedEof);
    }
    let records = rdr.read_exact(record_len as usize)?;
    let tokens = Token::parse_stream(records)?;
    let decoded = lz77::decode(&tokens)?;

    if decoded.len() as u64 != decoded_len {
        return Err(Error::DecodedLengthMismatch {
            expected: decoded_len,
            found: decoded.len() as u64,
        });
    }
    let found = crc32fast::hash(&decoded);
    if found != crc {
        return Err(Error::Crc32Mismatch { expected: crc, found });
    }

    Ok(decoded)
}

/// Read a frame's header fields without decoding the payload
pub fn inspect(frame: &[u8]) -> Result<FrameInfo> {
    let codec = detect(frame).ok_or_else(|| {
        let mut magic = [0u8; 4];
        let n = frame.len().min(4);
        magic[..n].copy_from_slice(&frame[..n]);
        Error::InvalidMagic(magic)
    })?;

    let mut rdr = ByteReader::new(&frame[4..]);
    match codec {
        Codec::Huffman => {
            let decoded_len = rdr.read_u64_le()?;
            let bit_len = rdr.read_u64_le()?;
            let _crc = rdr.read_u32_le()?;
            let distinct_symbols = rdr.read_u16_le()?;
            Ok(FrameInfo {
                codec,
                decoded_len,
                detail: CodecDetail::Huffman { bit_len, distinct_symbols },
            })
        }
        Codec::Lz77 => {
            let decoded_len = rdr.read_u64_le()?;
            let _crc = rdr.read_u32_le()?;
            let window_size = rdr.read_u16_le()?;
            let token_count = rdr.read_u32_le()?;
            Ok(FrameInfo {
                codec,
                decoded_len,
                detail: CodecDetail::Lz77 { token_count, window_size },
            })
        }
    }
}

/// Cursor over a byte slice for header parsing
struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.buf.len() - self.pos < n {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_exact(1)?[0])
    }

    fn read_u16_le(&mut self) -> Result<u16> {
        let b = self.read_exact(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        let b = self.read_exact(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn read_u64_le(&mut self) -> Result<u64> {
        let b = self.read_exact(8)?;
        Ok(u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    fn expect_magic(&mut self, magic: [u8; 4]) -> Result<()> {
        let found = self.read_exact(4).map_err(|_| {
            let mut partial = [0u8; 4];
            let n = self.buf.len().min(4);
            partial[..n].copy_from_slice(&self.buf[..n]);
            Error::InvalidMagic(partial)
        })?;
        if found != magic.as_slice() {
            return Err(Error::InvalidMagic([found[0], found[1], found[2], found[3]]));
        }
        Ok(())
    }
}
