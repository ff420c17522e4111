// crates/worldfacets-core/src/traits.rs
use crate::model::{Continent, Country, Language};
use crate::text::{contains_normalized, normalize_term};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: case-insensitive equality
/// - [`NameMatch::name_contains`]: case-insensitive substring match on the
///   trimmed query
///
/// Matching is plain lowercasing; there is no accent folding or typo
/// tolerance.
///
/// # Examples
/// ```rust
/// use worldfacets_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Germany").is_named("GERMANY"));
/// assert!(Place("Germany").name_contains(" man "));
/// assert!(!Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().trim().to_lowercase() == normalize_term(q)
    }

    /// An empty (or whitespace-only) query matches everything.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_normalized(self.name_str(), &normalize_term(q))
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Continent {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Language {
    fn name_str(&self) -> &str {
        &self.name
    }
}
