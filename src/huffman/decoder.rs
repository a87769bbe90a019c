use super::tree::{HuffmanTree, NodeKind};
use crate::bits::{BitReader, BitStream};
use crate::error::{Error, Result};

/// Decode a bit stream by walking the tree.
///
/// Each bit steps left (0) or right (1) from the current node; reaching
/// a leaf emits its byte and resets the cursor to the root. The stream's
/// exact bit count means the walk ends precisely at the last symbol;
/// ending mid-path is a corrupt or mismatched stream.
///
/// An empty stream decodes to an empty buffer.
pub fn decode(tree: &HuffmanTree, stream: &BitStream) -> Result<Vec<u8>> {
    // Lone-leaf tree: one bit per symbol, nothing to traverse
    if let NodeKind::Leaf(byte) = tree.node(tree.root()).kind {
        let count = stream.bit_len() as usize;
        return Ok(vec![byte; count]);
    }

    let mut reader = BitReader::new(stream);
    let mut output = Vec::with_capacity(stream.bit_len() as usize / 2 + 1);
    let mut current = tree.root();

    while let Some(bit) = reader.read_bit() {
        current = match tree.node(current).kind {
            NodeKind::Internal { left, right } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            // Cursor resets to the root after every emitted symbol
            NodeKind::Leaf(_) => unreachable!("walk never rests on a leaf"),
        };

        if let NodeKind::Leaf(byte) = tree.node(current).kind {
            output.push(byte);
            current = tree.root();
        }
    }

    if current != tree.root() {
        return Err(Error::CorruptBitStream { bit: reader.position() });
    }

    Ok(output)
}
