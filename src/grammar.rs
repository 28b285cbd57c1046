//! Grammar validation helpers for media type names.
//!
//! Based on the restricted-name rules of RFC 6838 section 4.2, narrowed to the
//! registries this crate accepts.

/// Top-level types accepted by [`is_valid_type`].
pub const TYPES: &[&str] = &[
    "application",
    "audio",
    "example",
    "font",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

/// Registration trees accepted by [`is_valid_tree`]: vendor, personal and unregistered.
pub const TREES: &[&str] = &["vnd", "prs", "x"];

/// Structured syntax suffixes accepted by [`is_valid_suffix`].
pub const SUFFIXES: &[&str] = &[
    "xml",
    "json",
    "ber",
    "der",
    "fastinfoset",
    "wbxml",
    "zip",
    "cbor",
];

/// Maximum length of a restricted name.
pub const MAX_NAME_LEN: usize = 127;

/// Reports whether the character may start a restricted name.
///
/// restricted-name-first := ALPHA / DIGIT
pub fn is_restricted_name_first(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Reports whether the character may appear after the first position of a restricted name.
///
/// restricted-name-chars := ALPHA / DIGIT / "!" / "#" / "$" / "&" / "-" / "^" / "_" / "." / "+"
pub fn is_restricted_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '!' | '#' | '$' | '&' | '-' | '^' | '_' | '.' | '+')
}

/// Reports whether the string is a valid restricted name.
///
/// Equivalent to `^[0-9A-Za-z][0-9A-Za-z!#$&\-^_.+]{0,126}$`.
pub fn is_restricted_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_restricted_name_first(first) => {}
        _ => return false,
    }
    // every accepted char is ASCII, so the byte length is the char count
    s.len() <= MAX_NAME_LEN && chars.all(is_restricted_name_char)
}

/// Reports whether `t` is a well-formed, known top-level type.
///
/// The comparison is case-sensitive: `"Text"` is rejected.
pub fn is_valid_type(t: &str) -> bool {
    is_restricted_name(t) && TYPES.contains(&t)
}

/// Reports whether `s` is a well-formed subtype, including any tree and suffix.
pub fn is_valid_sub_type(s: &str) -> bool {
    is_restricted_name(s)
}

/// Reports whether `s` is a known structured syntax suffix.
pub fn is_valid_suffix(s: &str) -> bool {
    SUFFIXES.contains(&s)
}

/// Reports whether `t` is a known registration tree.
pub fn is_valid_tree(t: &str) -> bool {
    TREES.contains(&t)
}
