//! Shared utility helpers.

/// Case-insensitive substring search without allocating a lowercase copy.
#[inline]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    find_ci(haystack, needle).is_some()
}

/// Case-insensitive find: returns the byte offset of the first occurrence of `needle`.
#[inline]
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let needle_bytes = needle.as_bytes();
    let haystack_bytes = haystack.as_bytes();
    if needle_bytes.is_empty() {
        return Some(0);
    }
    if needle_bytes.len() > haystack_bytes.len() {
        return None;
    }
    haystack_bytes
        .windows(needle_bytes.len())
        .position(|window| window.eq_ignore_ascii_case(needle_bytes))
}

/// Spaces needed to right-pad `text` to `width` characters; empty once `text` is that wide.
#[inline]
pub fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}
