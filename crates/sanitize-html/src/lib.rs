//! Allow-list HTML sanitizer for CMS-authored rich text.
//!
//! Takes untrusted HTML from a headless CMS and produces a string safe to
//! inject into a rendered page. Three passes, each a pure single-forward
//! scan: dangerous elements are removed with their content, remaining tag
//! tokens are filtered against a fixed tag allow-list, and attributes of
//! kept opening tags are filtered against a fixed attribute allow-list with
//! URL-scheme checks on `href`/`src`.
//!
//! The engine is total: any input produces some output, and the worst
//! malformed input can do is get itself stripped harder than intended. It
//! is not an HTML parser -- no DOM is built and well-formedness is neither
//! checked nor repaired. Text nodes pass through unescaped; entity-escaping
//! plain text is the renderer's concern.

#[macro_use]
extern crate tracing;

pub mod policy;

mod attrs;
mod filter;
mod scan;
mod strict;
mod strip;

pub use policy::{ALLOWED_ATTRS, ALLOWED_TAGS, DANGEROUS_TAGS, MAX_INPUT_LEN};
pub use strict::{sanitize_html_strict, sanitize_html_to_text};

/// Sanitize untrusted HTML. Never fails; empty input yields empty output.
///
/// Input longer than [`policy::MAX_INPUT_LEN`] bytes is truncated (at a
/// char boundary) before scanning -- a page render must not crash or stall
/// on a pathological payload. Use [`sanitize_html_checked`] to reject
/// oversized input instead.
pub fn sanitize_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let html = clip(html);
    let stripped = strip::strip_dangerous(html);
    filter::filter_tags(&stripped)
}

/// Like [`sanitize_html`], but refuses oversized input rather than
/// truncating it.
pub fn sanitize_html_checked(html: &str) -> Result<String, InputTooLarge> {
    if html.len() > policy::MAX_INPUT_LEN {
        return Err(InputTooLarge { len: html.len() });
    }
    Ok(sanitize_html(html))
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("refusing to sanitize {len} byte input (limit is {} bytes)", policy::MAX_INPUT_LEN)]
pub struct InputTooLarge {
    pub len: usize,
}

fn clip(html: &str) -> &str {
    if html.len() <= policy::MAX_INPUT_LEN {
        return html;
    }
    let mut end = policy::MAX_INPUT_LEN;
    while !html.is_char_boundary(end) {
        end -= 1;
    }
    warn!(
        "truncating oversized input before sanitizing: {} bytes (limit {})",
        html.len(),
        policy::MAX_INPUT_LEN
    );
    &html[..end]
}
