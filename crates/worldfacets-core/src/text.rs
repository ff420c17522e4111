// crates/worldfacets-core/src/text.rs
//! Text helpers shared by the predicates and the ranking code.
//!
//! Matching and ordering use two different normalizations:
//! search stays a plain lowercase substring test, while name ordering uses a
//! transliterated key so accented names sort next to their ASCII neighbours.

use std::cmp::Ordering;

/// Convert a string into a folded key suitable for ordering.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use worldfacets_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Ordering used wherever results are sorted "by name ascending".
///
/// Compares folded keys first and falls back to the raw strings so the
/// ordering stays total for names that fold to the same key.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

/// Trim and lowercase a free-text search term.
///
/// An empty result means "no name filter".
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring test against an already normalized needle.
#[inline]
pub fn contains_normalized(haystack: &str, normalized_needle: &str) -> bool {
    normalized_needle.is_empty() || haystack.to_lowercase().contains(normalized_needle)
}

/// View an optional upstream string, treating blank values as absent.
#[inline]
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
