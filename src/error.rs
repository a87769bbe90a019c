use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors (CLI boundary only; the codecs never touch I/O)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Encode-side errors
    #[error("Empty input: nothing to compress")]
    EmptyInput,

    #[error("Window size {0} out of range (must be 1..=65535 so offsets fit 16 bits)")]
    InvalidWindowSize(usize),

    // Huffman decode errors
    #[error("Bit stream ended mid-path through the Huffman tree at bit {bit}")]
    CorruptBitStream { bit: u64 },

    #[error("Bit stream length mismatch: {bit_len} bits does not pack into {found} bytes")]
    BitLengthMismatch { bit_len: u64, found: usize },

    #[error("Tree does not match bit stream: expected {expected} decoded bytes, got {found}")]
    TreeMismatch { expected: u64, found: u64 },

    // LZ77 decode errors
    #[error("Token stream truncated: {len} bytes is not a multiple of the {record}-byte record")]
    TruncatedTokenStream { len: usize, record: usize },

    #[error("Token offset {offset} exceeds reconstructed output length {available}")]
    InvalidOffset { offset: u16, available: usize },

    // Frame errors
    #[error("Decoded length mismatch: expected {expected} bytes, got {found}")]
    DecodedLengthMismatch { expected: u64, found: u64 },

    #[error("Invalid frame magic: {0:02x?}")]
    InvalidMagic([u8; 4]),

    #[error("CRC32 mismatch: expected 0x{expected:08x}, got 0x{found:08x}")]
    Crc32Mismatch { expected: u32, found: u32 },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

pub type Result<T> = std::result::Result<T, Error>;
