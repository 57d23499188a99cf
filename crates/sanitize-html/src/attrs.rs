//! Third pass: attribute filtering and tag reconstruction.
//!
//! Runs once per allowed opening tag. Extracts `name=value` pairs with
//! double-quoted, single-quoted or unquoted values, keeps the ones the
//! policy admits, and rebuilds the tag from scratch -- retained values are
//! always re-emitted double-quoted with `"` escaped, so nothing from the
//! source token reaches the output verbatim. Bare attributes (no `=`) are
//! dropped.

use crate::policy;
use crate::scan;

/// Append the reconstructed opening tag for `tag` (already lower-cased) to
/// `out`. `body` is the raw token text between the tag name and `>`.
pub fn rebuild_tag(out: &mut String, tag: &str, body: &str) {
    out.push('<');
    out.push_str(tag);

    let mut rest = body;
    while let Some(c) = scan::peek(rest) {
        if !c.is_ascii_alphabetic() {
            scan::take_char(&mut rest);
            continue;
        }
        let name = scan::take_while(&mut rest, |c| c.is_ascii_alphanumeric() || c == '-')
            .to_ascii_lowercase();
        scan::skip_ws(&mut rest);
        if !scan::eat(&mut rest, '=') {
            // Bare attribute; nothing to keep.
            continue;
        }
        scan::skip_ws(&mut rest);
        let value = take_value(&mut rest);
        if keep_attr(&name, value) {
            push_attr(out, &name, value);
        }
    }

    // Self-closing if the source said so, or always for void elements.
    if body.ends_with('/') || policy::tag_void(tag) {
        out.push_str(" /");
    }
    out.push('>');
}

/// A quoted value runs to its closing quote or the end of the token; an
/// unquoted one to the next whitespace. Mismatched quotes mis-scope a value
/// at worst, they never leak one through unescaped.
fn take_value<'a>(rest: &mut &'a str) -> &'a str {
    match scan::peek(rest) {
        Some(q @ ('"' | '\'')) => {
            scan::take_char(rest);
            let value = scan::take_while(rest, |c| c != q);
            scan::eat(rest, q);
            value
        }
        _ => scan::take_while(rest, |c| !c.is_ascii_whitespace()),
    }
}

fn keep_attr(name: &str, value: &str) -> bool {
    if policy::attr_is_data(name) {
        return true;
    }
    if !policy::attr_allowed(name) {
        return false;
    }
    if name == "href" || name == "src" {
        if has_scheme(value, "javascript:") {
            return false;
        }
        if has_scheme(value, "data:") {
            // Inline images are the one data: use worth keeping.
            return name == "src" && has_scheme(value, "data:image/");
        }
    }
    true
}

/// Case-insensitive scheme prefix test, ignoring leading whitespace (which
/// browsers strip before resolving a URL).
fn has_scheme(value: &str, scheme: &str) -> bool {
    let value = value.trim_start();
    value.len() >= scheme.len()
        && value.as_bytes()[..scheme.len()].eq_ignore_ascii_case(scheme.as_bytes())
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    if value.contains('"') {
        out.push_str(&value.replace('"', "&quot;"));
    } else {
        out.push_str(value);
    }
    out.push('"');
}
