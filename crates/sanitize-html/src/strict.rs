//! Optional outer passes built on ammonia.
//!
//! The rendering layer originally ran a richer third-party sanitizer on the
//! client when one was available. That shows up here as a *second* pass
//! layered over the core engine, configured from the same policy constants,
//! never as an independent reimplementation of the allow-list logic.

use std::collections::HashSet;

use crate::policy;

/// Core sanitization followed by an ammonia pass.
///
/// Strictly tighter than [`crate::sanitize_html`]: ammonia additionally
/// entity-escapes text nodes, balances tags, and applies its own URL
/// handling (which drops `data:image/` sources the core pass would keep).
pub fn sanitize_html_strict(html: &str) -> String {
    let first = crate::sanitize_html(html);

    ammonia::Builder::default()
        .tags(HashSet::from_iter(policy::ALLOWED_TAGS.iter().copied()))
        .generic_attributes(HashSet::from_iter(policy::ALLOWED_ATTRS.iter().copied()))
        .add_generic_attribute_prefixes([policy::DATA_ATTR_PREFIX])
        .url_schemes(HashSet::from_iter(["http", "https", "mailto", "tel"]))
        // rel is caller-controlled content here, not something to synthesize
        .link_rel(None)
        .clean(&first)
        .to_string()
}

/// Strip all markup, keeping text content only. Used for excerpts and other
/// plain-text projections of the same CMS fields.
pub fn sanitize_html_to_text(html: &str) -> String {
    ammonia::Builder::empty().clean(html).to_string()
}
