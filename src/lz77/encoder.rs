use super::matcher::{find_longest_match, MAX_WINDOW};
use super::token::Token;
use crate::error::{Error, Result};

/// Window size used by the CLI when none is given
pub const DEFAULT_WINDOW: usize = 4096;

/// Tokenize a byte buffer left to right.
///
/// Each token covers its match run plus one literal, so the cursor
/// advances `length + 1` per token and the final token always lands
/// exactly on the end of the input.
pub fn encode(input: &[u8], window_size: usize) -> Result<Vec<Token>> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    if window_size == 0 || window_size > MAX_WINDOW {
        return Err(Error::InvalidWindowSize(window_size));
    }

    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        let token = find_longest_match(input, cursor, window_size);
        cursor += token.uncompressed_size();
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(encode(b"", 4096), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(encode(b"abc", 0), Err(Error::InvalidWindowSize(0))));
    }

    #[test]
    fn test_oversized_window_rejected() {
        assert!(matches!(encode(b"abc", 70_000), Err(Error::InvalidWindowSize(70_000))));
    }

    #[test]
    fn test_first_token_always_literal() {
        let tokens = encode(b"zzzz", 4096).unwrap();
        assert!(tokens[0].is_literal());
        assert_eq!(tokens[0].next, b'z');
    }

    #[test]
    fn test_abab_tokens() {
        let tokens = encode(b"abab", 4096).unwrap();
        assert_eq!(tokens[0], Token::literal(b'a'));
        assert_eq!(tokens[1], Token::literal(b'b'));
        assert_eq!(tokens[2], Token { offset: 2, length: 1, next: b'b' });
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_tokens_cover_input_exactly() {
        let input = b"the rain in spain stays mainly in the plain";
        let tokens = encode(input, 4096).unwrap();
        let covered: usize = tokens.iter().map(|t| t.uncompressed_size()).sum();
        assert_eq!(covered, input.len());
    }

    #[test]
    fn test_window_one_still_encodes() {
        let tokens = encode(b"aaaabbbb", 1).unwrap();
        let covered: usize = tokens.iter().map(|t| t.uncompressed_size()).sum();
        assert_eq!(covered, 8);
    }

    #[test]
    fn test_deterministic() {
        let input = b"repeat repeat repeat repeat";
        assert_eq!(encode(input, 4096).unwrap(), encode(input, 4096).unwrap());
    }
}
