//! Cursor helpers for the tag scanners.
//!
//! All scanning in this crate works on a `&mut &str` cursor: helpers consume
//! from the front of the borrowed slice and the caller keeps the remainder.
//! This keeps every pass single-forward-pass and allocation-free until
//! output is built.

pub fn take_char(input: &mut &str) -> Option<char> {
    let mut chars = input.chars();
    let next = chars.next();
    *input = chars.as_str();
    next
}

pub fn peek(input: &str) -> Option<char> {
    input.chars().next()
}

/// Consume the longest prefix whose chars satisfy `f`, returning it.
pub fn take_while<'a>(input: &mut &'a str, f: impl Fn(char) -> bool) -> &'a str {
    for (i, c) in input.char_indices() {
        if !f(c) {
            let (found, rest) = input.split_at(i);
            *input = rest;
            return found;
        }
    }
    std::mem::take(input)
}

/// Consume `expected` if it is next; report whether it was.
pub fn eat(input: &mut &str, expected: char) -> bool {
    let mut chars = input.chars();
    if chars.next() == Some(expected) {
        *input = chars.as_str();
        true
    } else {
        false
    }
}

pub fn skip_ws(input: &mut &str) {
    take_while(input, |c| c.is_ascii_whitespace());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_while_splits_at_first_mismatch() {
        let mut s = "abc123";
        assert_eq!(take_while(&mut s, |c| c.is_ascii_alphabetic()), "abc");
        assert_eq!(s, "123");
    }

    #[test]
    fn take_while_can_consume_everything() {
        let mut s = "abc";
        assert_eq!(take_while(&mut s, |_| true), "abc");
        assert_eq!(s, "");
    }

    #[test]
    fn eat_only_consumes_on_match() {
        let mut s = "<p>";
        assert!(eat(&mut s, '<'));
        assert!(!eat(&mut s, '<'));
        assert_eq!(s, "p>");
    }

    #[test]
    fn skip_ws_stops_at_non_space() {
        let mut s = " \t\n x";
        skip_ws(&mut s);
        assert_eq!(s, "x");
    }
}
