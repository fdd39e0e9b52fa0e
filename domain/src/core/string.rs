//! String utilities for the domain layer.

/// Case-insensitive equality used for specialty names.
///
/// Names are compared exactly after lowercasing; surrounding whitespace is
/// significant, matching what the store holds.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Whether a name is empty or only whitespace. Such a specialty name means
/// "no specialty".
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Case-insensitive substring search. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
