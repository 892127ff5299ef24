// Character-safe suffix helpers
//
// Finnish verbs contain `ä` and `ö`, which are two bytes in UTF-8. All
// trimming here counts characters so that no input can split a code point.

/// Return `s` without its last `n` characters.
///
/// Strings shorter than `n` characters yield the empty string.
pub fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().nth_back(n - 1) {
        Some((i, _)) => &s[..i],
        None => "",
    }
}

/// Check whether `s` ends with any of the given suffixes.
pub fn ends_with_any(s: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| s.ends_with(suffix))
}

/// Number of characters (not bytes) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
