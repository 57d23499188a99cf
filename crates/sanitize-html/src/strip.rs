//! First pass: removal of dangerous elements and everything inside them.
//!
//! `script`, `style` and friends are never safe to keep even partially, so
//! the whole element is dropped: opening tag (attributes tolerated) through
//! the shortest following close of the same name, case-insensitively. An
//! opening tag that never closes consumes the rest of the input; for this
//! tag class losing trailing content is the safe direction.

use crate::policy;
use crate::scan;

pub fn strip_dangerous(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        rest = &rest[lt..];

        let mut cursor = &rest[1..];
        match open_tag_name(&mut cursor) {
            Some(name) if policy::tag_dangerous(name) => {
                // cursor sits after the tag name; find the end of the
                // opening tag, then the matching close.
                rest = match cursor.find('>') {
                    Some(gt) => skip_to_close(&cursor[gt + 1..], name),
                    // Unterminated opening tag: consume to end of input.
                    None => "",
                };
            }
            _ => {
                // Not a dangerous open; emit the '<' and rescan from the
                // next char so later passes see the token untouched.
                out.push('<');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse a tag name right after `<`. Returns `None` unless the name starts
/// with an ASCII letter and ends at a proper boundary (whitespace, `/`,
/// `>`, or end of input), so `<scripty>` is not a `<script>` open.
fn open_tag_name<'a>(cursor: &mut &'a str) -> Option<&'a str> {
    if !scan::peek(cursor)?.is_ascii_alphabetic() {
        return None;
    }
    let name = scan::take_while(cursor, |c| c.is_ascii_alphanumeric());
    match scan::peek(cursor) {
        None | Some('>' | '/') => Some(name),
        Some(c) if c.is_ascii_whitespace() => Some(name),
        _ => None,
    }
}

/// Scan past the shortest `</name>` (case-insensitive, optional whitespace
/// before `>`), returning the remainder. No close means everything goes.
fn skip_to_close<'a>(mut rest: &'a str, name: &str) -> &'a str {
    while let Some(lt) = rest.find('<') {
        rest = &rest[lt + 1..];
        let mut cursor = rest;
        if !scan::eat(&mut cursor, '/') {
            continue;
        }
        let candidate = scan::take_while(&mut cursor, |c| c.is_ascii_alphanumeric());
        if !candidate.eq_ignore_ascii_case(name) {
            continue;
        }
        scan::skip_ws(&mut cursor);
        if scan::eat(&mut cursor, '>') {
            return cursor;
        }
    }
    ""
}
