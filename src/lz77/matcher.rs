use super::token::Token;
use memchr::memchr_iter;

/// Largest window the 16-bit offset field can address
pub const MAX_WINDOW: usize = u16::MAX as usize;

/// Longest match the 8-bit length field can record
pub const MAX_MATCH: usize = u8::MAX as usize;

/// Find the longest backward match for the bytes at `cursor`.
///
/// Candidate start positions are scanned in ascending order from the
/// window edge, and only a strictly longer match replaces the current
/// best, so the first-found maximal match wins ties. The match length is
/// capped at `min(255, remaining - 1)`: the length must fit its token
/// field, and every token must end with a real literal byte.
///
/// Matches may run past `cursor` into the lookahead (self-referential
/// runs), exactly as the decoder's byte-by-byte copy reproduces them.
pub fn find_longest_match(input: &[u8], cursor: usize, window_size: usize) -> Token {
    debug_assert!(cursor < input.len());
    debug_assert!((1..=MAX_WINDOW).contains(&window_size));

    let max_len = MAX_MATCH.min(input.len() - cursor - 1);
    let start = cursor.saturating_sub(window_size);

    let mut best_len = 0usize;
    let mut best_offset = 0usize;

    if max_len > 0 {
        // A candidate whose first byte differs can never beat best_len >= 0
        // under strict improvement, so only first-byte hits are scanned.
        for i in memchr_iter(input[cursor], &input[start..cursor]).map(|rel| start + rel) {
            let mut len = 1;
            while len < max_len && input[i + len] == input[cursor + len] {
                len += 1;
            }
            if len > best_len {
                best_len = len;
                best_offset = cursor - i;
            }
            if best_len == max_len {
                break;
            }
        }
    }

    Token { offset: best_offset as u16, length: best_len as u8, next: input[cursor + best_len] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_zero_is_literal() {
        let token = find_longest_match(b"abc", 0, 4096);
        assert_eq!(token, Token::literal(b'a'));
    }

    #[test]
    fn test_no_match_is_literal() {
        let token = find_longest_match(b"abcd", 3, 4096);
        assert_eq!(token, Token::literal(b'd'));
    }

    #[test]
    fn test_simple_match() {
        // "abab" at cursor 2: "ab" matches 2 back, literal is beyond input
        // so the match is capped at 1 to leave a real literal.
        let token = find_longest_match(b"abab", 2, 4096);
        assert_eq!(token, Token { offset: 2, length: 1, next: b'b' });
    }

    #[test]
    fn test_match_with_trailing_literal() {
        // "abcabcx" at cursor 3: match "abc" (3 back), literal 'x'
        let token = find_longest_match(b"abcabcx", 3, 4096);
        assert_eq!(token, Token { offset: 3, length: 3, next: b'x' });
    }

    #[test]
    fn test_self_referential_run() {
        // "aaaaaaa" at cursor 1: match extends into the lookahead
        let token = find_longest_match(b"aaaaaaa", 1, 4096);
        assert_eq!(token, Token { offset: 1, length: 5, next: b'a' });
    }

    #[test]
    fn test_window_limits_candidates() {
        // "xy...xy" with the first "xy" outside a tiny window
        let input = b"xyabcdxy";
        let token = find_longest_match(input, 6, 2);
        // Window covers only positions 4-5 ("cd"); no 'x' there
        assert_eq!(token, Token::literal(b'x'));
    }

    #[test]
    fn test_first_found_maximal_match_wins_ties() {
        // Two equal-length candidates: the earlier (more distant) position
        // is scanned first and a later equal match must not replace it.
        let input = b"ab_ab_abz";
        let token = find_longest_match(input, 6, 4096);
        assert_eq!(token.length, 2);
        assert_eq!(token.offset, 6);
        assert_eq!(token.next, b'z');
    }

    #[test]
    fn test_length_capped_at_255() {
        let input = vec![b'a'; 600];
        let token = find_longest_match(&input, 1, 4096);
        assert_eq!(token.length, 255);
        assert_eq!(token.offset, 1);
        assert_eq!(token.next, b'a');
    }
}
