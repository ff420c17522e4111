// crates/worldfacets-core/src/aggregate/language.rs
use super::{distinct_languages_of, tally, TOP_MULTILINGUAL, TOP_N};
use crate::model::Country;
use crate::text::compare_names;
use log::debug;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashSet;

/// One slice of the language pie: how many countries speak `language`, and
/// its share of all language-country pairings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub count: usize,
    pub percentage: f64,
}

/// Top [`TOP_N`] languages by number of countries speaking them.
///
/// Percentages are relative to the total number of (country, language)
/// pairings, so they sum to at most 100. Ties keep encounter order. An input
/// without any pairing yields an empty list.
pub fn language_distribution<C: Borrow<Country>>(countries: &[C]) -> Vec<LanguageShare> {
    let mut counts = tally(
        countries
            .iter()
            .map(<C as Borrow<Country>>::borrow)
            .flat_map(distinct_languages_of),
    );
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    debug!(
        "language_distribution: {} languages, {} pairings",
        counts.len(),
        total
    );

    counts
        .into_iter()
        .take(TOP_N)
        .map(|(language, count)| LanguageShare {
            language: language.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// A language name with the number of countries speaking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub name: String,
    pub count: usize,
}

/// Every language in the collection, by count descending then name.
pub fn all_languages<C: Borrow<Country>>(countries: &[C]) -> Vec<LanguageCount> {
    let mut counts = tally(
        countries
            .iter()
            .map(<C as Borrow<Country>>::borrow)
            .flat_map(distinct_languages_of),
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| compare_names(a.0, b.0)));
    counts
        .into_iter()
        .map(|(name, count)| LanguageCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Number of distinct language names spoken anywhere in the collection.
pub fn distinct_language_count<C: Borrow<Country>>(countries: &[C]) -> usize {
    countries
        .iter()
        .map(<C as Borrow<Country>>::borrow)
        .flat_map(distinct_languages_of)
        .collect::<HashSet<_>>()
        .len()
}

/// A country ranked by how many languages it lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultilingualEntry<'a> {
    pub country: &'a Country,
    pub language_count: usize,
    pub languages: Vec<&'a str>,
}

/// Result of [`countries_with_many_languages`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRichness<'a> {
    pub top_country: Option<MultilingualEntry<'a>>,
    pub top_countries: Vec<MultilingualEntry<'a>>,
    /// Mean language count; 0.0 for an empty collection.
    pub average_languages: f64,
    pub country_count: usize,
}

impl LanguageRichness<'_> {
    /// The mean with one decimal, or `"N/A"` when there were no countries.
    pub fn average_label(&self) -> String {
        if self.country_count == 0 {
            "N/A".to_string()
        } else {
            format!("{:.1}", self.average_languages)
        }
    }
}

/// Rank countries by number of spoken languages (descending, ties by name).
pub fn countries_with_many_languages<C: Borrow<Country>>(countries: &[C]) -> LanguageRichness<'_> {
    let mut ranked: Vec<MultilingualEntry<'_>> = countries
        .iter()
        .map(<C as Borrow<Country>>::borrow)
        .map(|country| MultilingualEntry {
            country,
            language_count: country.languages.len(),
            languages: country.language_names().collect(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.language_count
            .cmp(&a.language_count)
            .then_with(|| compare_names(a.country.name(), b.country.name()))
    });

    let country_count = ranked.len();
    let average_languages = if country_count == 0 {
        0.0
    } else {
        let total: usize = ranked.iter().map(|e| e.language_count).sum();
        total as f64 / country_count as f64
    };

    ranked.truncate(TOP_MULTILINGUAL);
    LanguageRichness {
        top_country: ranked.first().cloned(),
        top_countries: ranked,
        average_languages,
        country_count,
    }
}
