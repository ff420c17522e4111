// crates/worldfacets-core/src/predicate.rs
//! One pure predicate per facet.
//!
//! Every predicate accepts everything when its selection is empty, and
//! within a selection the values are ORed. None of them can panic: a missing
//! currency simply fails an active currency filter.

use crate::model::Country;
use crate::state::Facet;
use crate::traits::NameMatch;

/// Case-insensitive substring match on the country name.
///
/// The term is trimmed first; an empty term matches every country.
pub fn matches_name(country: &Country, term: &str) -> bool {
    country.name_contains(term)
}

/// The country's continent code is one of `selected`.
pub fn matches_continents<S: AsRef<str>>(country: &Country, selected: &[S]) -> bool {
    selected.is_empty()
        || selected
            .iter()
            .any(|code| code.as_ref() == country.continent_code())
}

/// The country speaks at least one of `selected` (union, not "all of").
pub fn matches_languages<S: AsRef<str>>(country: &Country, selected: &[S]) -> bool {
    selected.is_empty()
        || country
            .language_names()
            .any(|name| selected.iter().any(|s| s.as_ref() == name))
}

/// The country has a currency and it is one of `selected`.
pub fn matches_currencies<S: AsRef<str>>(country: &Country, selected: &[S]) -> bool {
    if selected.is_empty() {
        return true;
    }
    match country.currency() {
        Some(currency) => selected.iter().any(|s| s.as_ref() == currency),
        None => false,
    }
}

/// Dispatch to the predicate for `facet`.
pub fn matches_facet<S: AsRef<str>>(country: &Country, facet: Facet, selected: &[S]) -> bool {
    match facet {
        Facet::Continent => matches_continents(country, selected),
        Facet::Language => matches_languages(country, selected),
        Facet::Currency => matches_currencies(country, selected),
    }
}
