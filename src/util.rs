//! Shared utility helpers.

/// Case-insensitive find of the last occurrence of `needle` in `haystack`.
///
/// Returns the byte offset of the match. Folding is ASCII-only, so the offset
/// is always valid for slicing `haystack`.
#[inline]
pub fn rfind_ci(haystack: &str, needle: &str) -> Option<usize> {
    let needle_bytes = needle.as_bytes();
    let haystack_bytes = haystack.as_bytes();
    if needle_bytes.is_empty() || needle_bytes.len() > haystack_bytes.len() {
        return None;
    }
    haystack_bytes
        .windows(needle_bytes.len())
        .rposition(|window| window.eq_ignore_ascii_case(needle_bytes))
}

/// Wraps an identifier in backticks unless it is a plain `[A-Za-z0-9_]` word.
pub fn quote_identifier(ident: &str) -> String {
    let plain = !ident.is_empty()
        && !ident.starts_with(|c: char| c.is_ascii_digit())
        && ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        ident.to_string()
    } else {
        format!("`{}`", ident.replace('`', "``"))
    }
}
