//! Fixed sanitization policy.
//!
//! The allow-lists are compile-time constants rather than runtime
//! configuration so that callers cannot accidentally widen the trust
//! boundary. All names are stored lower-case; the predicates expect
//! already-lowercased input.

/// Tag names that survive sanitization.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6",
    "p", "br",
    "strong", "em", "b", "i", "u", "span",
    "a",
    "ul", "ol", "li",
    "div",
    "img", "figure", "figcaption",
    "table", "thead", "tbody", "tfoot", "tr", "th", "td",
    "blockquote", "hr", "pre", "code",
    "section", "article",
];

/// Attribute names that survive sanitization (plus the [`DATA_ATTR_PREFIX`]
/// wildcard).
pub const ALLOWED_ATTRS: &[&str] = &[
    "href", "target", "rel",
    "src", "alt", "title",
    "width", "height",
    "class", "id", "style",
];

/// Tags whose entire element, content included, is removed unconditionally.
pub const DANGEROUS_TAGS: &[&str] = &[
    "script", "style", "noscript", "object", "embed", "applet",
];

/// Void elements always emitted self-closed.
pub const VOID_TAGS: &[&str] = &["br", "img"];

/// Any attribute whose name starts with this prefix is admitted regardless
/// of [`ALLOWED_ATTRS`].
///
/// Deliberately permissive: CMS embeds rely on `data-*` payloads, and the
/// values are inert without a script to read them (scripts never survive
/// sanitization). Tightening the policy means removing the one use of this
/// constant in the attribute filter, nothing else.
pub const DATA_ATTR_PREFIX: &str = "data-";

/// Inputs longer than this (in bytes) are truncated or rejected before any
/// scanning happens, so untrusted content cannot buy unbounded work. Far
/// above any real CMS rich-text field.
pub const MAX_INPUT_LEN: usize = 1 << 20;

pub fn tag_allowed(name: &str) -> bool {
    ALLOWED_TAGS.contains(&name)
}

pub fn tag_dangerous(name: &str) -> bool {
    DANGEROUS_TAGS.iter().any(|t| name.eq_ignore_ascii_case(t))
}

pub fn tag_void(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

pub fn attr_allowed(name: &str) -> bool {
    ALLOWED_ATTRS.contains(&name)
}

pub fn attr_is_data(name: &str) -> bool {
    name.starts_with(DATA_ATTR_PREFIX)
}
