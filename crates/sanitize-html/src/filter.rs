//! Second pass: tag token filtering.
//!
//! Scans for tokens shaped `<`, optional `/`, an ASCII-letter-led name,
//! arbitrary non-`>` body, `>`. Tokens with a non-allow-listed name are
//! deleted (only the markers; the text between an open and its close is
//! ordinary text to this pass and survives unwrapped). Anything that is not
//! a token -- comments, stray `<`, a tag that never terminates -- passes
//! through as plain text, exactly as it arrived. Escaping of text nodes is
//! the renderer's job, not this engine's.

use crate::attrs;
use crate::policy;
use crate::scan;

pub fn filter_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        rest = &rest[lt..];

        match parse_token(rest) {
            Parsed::Token(token) => {
                emit_token(&mut out, &token);
                rest = token.rest;
            }
            Parsed::NotAToken => {
                out.push('<');
                rest = &rest[1..];
            }
            // No '>' left anywhere, so no further token can terminate
            // either. Emitting the remainder in one step keeps adversarial
            // inputs (long runs of near-tokens with no '>') linear.
            Parsed::NoTerminator => {
                out.push_str(rest);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

struct TagToken<'a> {
    /// Tag name as written (not yet lower-cased).
    name: &'a str,
    closing: bool,
    /// Raw text between the name and the terminating `>`.
    body: &'a str,
    /// Input after the terminating `>`.
    rest: &'a str,
}

enum Parsed<'a> {
    Token(TagToken<'a>),
    NotAToken,
    NoTerminator,
}

/// `input` starts at a `<`.
fn parse_token(input: &str) -> Parsed<'_> {
    let mut cursor = &input[1..];
    let closing = scan::eat(&mut cursor, '/');
    match scan::peek(cursor) {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return Parsed::NotAToken,
    }
    let name = scan::take_while(&mut cursor, |c| c.is_ascii_alphanumeric());
    if scan::peek(cursor) == Some('_') {
        // `<p_foo>` is not a `p` token.
        return Parsed::NotAToken;
    }
    let Some(gt) = cursor.find('>') else {
        return Parsed::NoTerminator;
    };
    Parsed::Token(TagToken {
        name,
        closing,
        body: &cursor[..gt],
        rest: &cursor[gt + 1..],
    })
}

fn emit_token(out: &mut String, token: &TagToken<'_>) {
    let name = token.name.to_ascii_lowercase();
    if !policy::tag_allowed(&name) {
        return;
    }
    if token.closing {
        // Closing tags carry nothing worth keeping past the name.
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
    } else {
        attrs::rebuild_tag(out, &name, token.body);
    }
}
