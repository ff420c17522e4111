// crates/worldfacets-core/src/intersect.rs
//! # Intersection Finder
//!
//! The language facet ORs its selections, so a country speaking two of the
//! selected languages appears once in the result list. This module reports
//! that overlap explicitly. It is a read-only view over an already filtered
//! collection, not an "all of" filter mode.

use crate::model::Country;
use crate::text::compare_names;
use serde::Serialize;
use std::borrow::Borrow;

/// A country together with the selected languages it speaks, in selection
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOverlap<'a> {
    pub country: &'a Country,
    pub matched_languages: Vec<&'a str>,
}

/// Countries speaking at least two of `selected`.
///
/// Returns nothing when fewer than two distinct languages are selected.
/// Results are ordered by number of matches (descending), then by country
/// name.
pub fn with_multiple_selected_languages<'a, C, S>(
    countries: &'a [C],
    selected: &'a [S],
) -> Vec<LanguageOverlap<'a>>
where
    C: Borrow<Country>,
    S: AsRef<str>,
{
    let mut wanted: Vec<&'a str> = Vec::with_capacity(selected.len());
    for s in selected {
        let s = s.as_ref();
        if !wanted.contains(&s) {
            wanted.push(s);
        }
    }
    if wanted.len() < 2 {
        return Vec::new();
    }

    let mut out: Vec<LanguageOverlap<'a>> = countries
        .iter()
        .map(<C as Borrow<Country>>::borrow)
        .filter_map(|country| {
            let matched_languages: Vec<&'a str> = wanted
                .iter()
                .copied()
                .filter(|lang| country.speaks(lang))
                .collect();
            (matched_languages.len() >= 2).then_some(LanguageOverlap {
                country,
                matched_languages,
            })
        })
        .collect();

    out.sort_by(|a, b| {
        b.matched_languages
            .len()
            .cmp(&a.matched_languages.len())
            .then_with(|| compare_names(a.country.name(), b.country.name()))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::country;

    #[test]
    fn canada_speaks_both_france_does_not() {
        let data = vec![
            country("FR", "France", "EU", None, &["French"]),
            country("CA", "Canada", "NA", None, &["English", "French"]),
        ];
        let out = with_multiple_selected_languages(&data, &["English", "French"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].country.code, "CA");
        assert_eq!(out[0].matched_languages, ["English", "French"]);
    }

    #[test]
    fn matched_languages_follow_selection_order() {
        let data = vec![country("CA", "Canada", "NA", None, &["English", "French"])];
        let out = with_multiple_selected_languages(&data, &["French", "English"]);
        assert_eq!(out[0].matched_languages, ["French", "English"]);
    }

    #[test]
    fn fewer_than_two_selected_gives_nothing() {
        let data = vec![country("CA", "Canada", "NA", None, &["English", "French"])];
        assert!(with_multiple_selected_languages(&data, &["English"]).is_empty());
        assert!(with_multiple_selected_languages(&data, &["English", "English"]).is_empty());
        let none: [&str; 0] = [];
        assert!(with_multiple_selected_languages(&data, &none).is_empty());
    }

    #[test]
    fn ranked_by_match_count_then_name() {
        let data = vec![
            country("CA", "Canada", "NA", None, &["English", "French"]),
            country("CH", "Switzerland", "EU", None, &["German", "French", "Italian"]),
            country("BE", "Belgium", "EU", None, &["Dutch", "French", "German"]),
            country("LU", "Luxembourg", "EU", None, &["French", "German", "Luxembourgish"]),
        ];
        let out = with_multiple_selected_languages(&data, &["French", "German", "Italian"]);
        let order: Vec<(&str, usize)> = out
            .iter()
            .map(|o| (o.country.code.as_str(), o.matched_languages.len()))
            .collect();
        assert_eq!(order, [("CH", 3), ("BE", 2), ("LU", 2)]);
    }
}
