use super::codes::CodeTable;
use super::tree::{FrequencyTable, HuffmanTree};
use crate::bits::{BitStream, BitWriter};
use crate::error::Result;

/// Everything produced by one Huffman encode: the frequency table and
/// tree the decode side needs, the code table, and the packed bits.
#[derive(Clone, Debug)]
pub struct HuffmanEncoded {
    pub frequencies: FrequencyTable,
    pub tree: HuffmanTree,
    pub codes: CodeTable,
    pub stream: BitStream,
}

/// Huffman-encode a byte buffer.
///
/// Concatenates each input byte's code in original order and packs the
/// result MSB-first. The returned [`BitStream`] records the exact bit
/// count, so the decoder never mistakes final-byte padding for data.
pub fn encode(input: &[u8]) -> Result<HuffmanEncoded> {
    let frequencies = FrequencyTable::build(input)?;
    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);

    let mut writer = BitWriter::with_capacity(input.len());
    for &byte in input {
        // Every input byte has a code: the table was built from this input
        let code = codes.get(byte).expect("input byte missing from code table");
        for bit in code.iter() {
            writer.write_bit(bit);
        }
    }

    Ok(HuffmanEncoded { frequencies, tree, codes, stream: writer.finish() })
}
