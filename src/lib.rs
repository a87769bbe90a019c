//! Two independent classical lossless codecs over in-memory byte buffers:
//! a Huffman entropy coder and an LZ77 dictionary coder.
//!
//! Both pipelines are single-threaded, whole-buffer transformations with
//! no shared state:
//!
//! - **Huffman**: [`huffman::FrequencyTable`] -> [`huffman::HuffmanTree`]
//!   (deterministic tie-break) -> [`huffman::CodeTable`] -> packed
//!   [`bits::BitStream`]; decode walks the tree bit by bit.
//! - **LZ77**: sliding-window longest-match search producing
//!   `(offset, length, next)` [`lz77::Token`]s; decode replays the
//!   back-references byte by byte.
//!
//! The [`frame`] module wraps either codec's output in a self-contained
//! container (frequency table or token records, exact bit count, decoded
//! length, CRC32) so decoding needs nothing beyond the frame bytes.

pub mod bits;
pub mod error;
pub mod frame;
pub mod huffman;
pub mod lz77;

pub use bits::BitStream;
pub use error::{Error, Result};
pub use frame::{
    compress_huffman, compress_lz77, decompress_huffman, decompress_lz77, Codec, FrameInfo,
};
pub use huffman::{CodeTable, FrequencyTable, HuffmanEncoded, HuffmanTree};
pub use lz77::Token;
