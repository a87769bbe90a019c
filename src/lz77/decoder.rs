use super::token::Token;
use crate::error::{Error, Result};

/// Reconstruct the original bytes from a token sequence.
///
/// Back-references are copied byte-by-byte, never as a block: when the
/// match overlaps the bytes being appended (offset < length), a copied
/// byte is re-read within the same token's span.
pub fn decode(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(tokens.len() * 2);

    for token in tokens {
        if token.is_literal() {
            output.push(token.next);
            continue;
        }

        let offset = token.offset as usize;
        if offset == 0 || offset > output.len() {
            return Err(Error::InvalidOffset { offset: token.offset, available: output.len() });
        }

        let start = output.len() - offset;
        for i in 0..token.length as usize {
            let byte = output[start + i];
            output.push(byte);
        }
        output.push(token.next);
    }

    Ok(output)
}
