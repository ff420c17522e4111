// crates/worldfacets-core/src/filter.rs
//! # Filter Engine
//!
//! Composes the per-facet predicates into a single AND pass and derives the
//! cross-filtered option lists each facet widget shows.
//!
//! All functions accept `&[Country]` as well as `&[&Country]`, so the output
//! of [`filter`] can be fed straight back in.

use crate::aggregate::{distinct_languages_of, tally};
use crate::model::Country;
use crate::predicate::{matches_facet, matches_name};
use crate::state::{Facet, FilterState};
use crate::text::{compare_names, normalize_term};
use crate::traits::NameMatch;
use log::debug;
use serde::Serialize;
use std::borrow::Borrow;

/// A pre-normalized view of a [`FilterState`] with optional parts switched
/// off. Built once per pass so the search term is lowercased only once.
struct Criteria<'s> {
    term: Option<String>,
    state: &'s FilterState,
    exclude: Option<Facet>,
}

impl<'s> Criteria<'s> {
    fn full(state: &'s FilterState) -> Self {
        let term = normalize_term(state.search_term());
        Self {
            term: (!term.is_empty()).then_some(term),
            state,
            exclude: None,
        }
    }

    /// Facet panel view: the search box and `facet` itself are ignored.
    fn without(state: &'s FilterState, facet: Facet) -> Self {
        Self {
            term: None,
            state,
            exclude: Some(facet),
        }
    }

    fn accepts(&self, country: &Country) -> bool {
        if let Some(term) = &self.term {
            if !matches_name(country, term) {
                return false;
            }
        }
        Facet::ALL
            .iter()
            .filter(|f| Some(**f) != self.exclude)
            .all(|f| matches_facet(country, *f, self.state.selected(*f)))
    }

    fn apply<'a, C: Borrow<Country>>(&self, countries: &'a [C]) -> Vec<&'a Country> {
        countries
            .iter()
            .map(<C as Borrow<Country>>::borrow)
            .filter(|c| self.accepts(c))
            .collect()
    }
}

/// Apply every active filter (name AND continent AND language AND currency).
///
/// The relative order of `countries` is preserved, and filtering an
/// already-filtered collection with the same state returns it unchanged.
pub fn filter<'a, C: Borrow<Country>>(countries: &'a [C], state: &FilterState) -> Vec<&'a Country> {
    let out = Criteria::full(state).apply(countries);
    debug!("filter: {} of {} countries match", out.len(), countries.len());
    out
}

/// Countries passing every facet except `facet` (and ignoring the search
/// term). This is the population a facet's own option list is built from.
pub fn filter_excluding<'a, C: Borrow<Country>>(
    countries: &'a [C],
    state: &FilterState,
    facet: Facet,
) -> Vec<&'a Country> {
    Criteria::without(state, facet).apply(countries)
}

/// Language ∧ currency; the continent selection is left out.
pub fn options_for_continent_facet<'a, C: Borrow<Country>>(
    countries: &'a [C],
    state: &FilterState,
) -> Vec<&'a Country> {
    filter_excluding(countries, state, Facet::Continent)
}

/// Continent ∧ currency; the language selection is left out.
pub fn options_for_language_facet<'a, C: Borrow<Country>>(
    countries: &'a [C],
    state: &FilterState,
) -> Vec<&'a Country> {
    filter_excluding(countries, state, Facet::Language)
}

/// Continent ∧ language; the currency selection is left out.
pub fn options_for_currency_facet<'a, C: Borrow<Country>>(
    countries: &'a [C],
    state: &FilterState,
) -> Vec<&'a Country> {
    filter_excluding(countries, state, Facet::Currency)
}

/// `true` if the state narrows the collection at all.
pub fn has_active_filters(state: &FilterState) -> bool {
    state.has_search() || state.has_facet_selection()
}

/// One entry of a facet's option list, e.g. `French (12)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

/// Option lists for all three facets, each cross-filtered by the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub continents: Vec<FacetOption>,
    pub languages: Vec<FacetOption>,
    pub currencies: Vec<FacetOption>,
}

impl FacetCounts {
    pub fn get(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::Continent => &self.continents,
            Facet::Language => &self.languages,
            Facet::Currency => &self.currencies,
        }
    }
}

/// Distinct values of `facet` among `countries`, with occurrence counts.
///
/// Countries with no value for the facet are skipped; a country listing the
/// same language twice is counted once for it.
fn distinct_values<'a>(countries: &[&'a Country], facet: Facet) -> Vec<(&'a str, usize)> {
    match facet {
        Facet::Continent => tally(
            countries
                .iter()
                .map(|c| c.continent_code())
                .filter(|code| !code.trim().is_empty()),
        ),
        Facet::Currency => tally(countries.iter().filter_map(|c| c.currency())),
        Facet::Language => tally(countries.iter().flat_map(|c| distinct_languages_of(c))),
    }
}

/// The option list for one facet.
///
/// Ordering: languages by count descending then name; continents and
/// currencies by code. Selected values that no longer occur are appended
/// with a zero count so they stay visible and can be deselected.
pub fn facet_options<C: Borrow<Country>>(
    countries: &[C],
    state: &FilterState,
    facet: Facet,
) -> Vec<FacetOption> {
    let pool = filter_excluding(countries, state, facet);
    let mut values = distinct_values(&pool, facet);

    match facet {
        Facet::Language => {
            values.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| compare_names(a.0, b.0)))
        }
        Facet::Continent | Facet::Currency => values.sort_by(|a, b| a.0.cmp(b.0)),
    }

    let mut options: Vec<FacetOption> = values
        .into_iter()
        .map(|(value, count)| FacetOption {
            value: value.to_string(),
            count,
            selected: state.is_selected(facet, value),
        })
        .collect();

    for value in state.selected(facet) {
        if !options.iter().any(|o| &o.value == value) {
            options.push(FacetOption {
                value: value.clone(),
                count: 0,
                selected: true,
            });
        }
    }
    options
}

pub fn continent_options<C: Borrow<Country>>(countries: &[C], state: &FilterState) -> Vec<FacetOption> {
    facet_options(countries, state, Facet::Continent)
}

pub fn language_options<C: Borrow<Country>>(countries: &[C], state: &FilterState) -> Vec<FacetOption> {
    facet_options(countries, state, Facet::Language)
}

pub fn currency_options<C: Borrow<Country>>(countries: &[C], state: &FilterState) -> Vec<FacetOption> {
    facet_options(countries, state, Facet::Currency)
}

/// All three option lists at once.
pub fn facet_counts<C: Borrow<Country>>(countries: &[C], state: &FilterState) -> FacetCounts {
    FacetCounts {
        continents: continent_options(countries, state),
        languages: language_options(countries, state),
        currencies: currency_options(countries, state),
    }
}

/// Countries whose name contains `term`, ignoring every facet.
pub fn search_by_name<'a, C: Borrow<Country>>(countries: &'a [C], term: &str) -> Vec<&'a Country> {
    countries
        .iter()
        .map(<C as Borrow<Country>>::borrow)
        .filter(|c| c.name_contains(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Continent, Language};

    fn country(code: &str, name: &str, continent: &str, currency: Option<&str>, langs: &[&str]) -> Country {
        Country {
            code: code.into(),
            name: name.into(),
            continent: Continent::new(continent, continent),
            capital: None,
            currency: currency.map(str::to_string),
            phone: None,
            emoji: None,
            languages: langs.iter().map(|l| Language::named(*l)).collect(),
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("FR", "France", "EU", Some("EUR"), &["French"]),
            country("BE", "Belgium", "EU", Some("EUR"), &["Dutch", "French", "German"]),
            country("DE", "Germany", "EU", Some("EUR"), &["German"]),
            country("CA", "Canada", "NA", Some("CAD"), &["English", "French"]),
            country("US", "United States", "NA", Some("USD"), &["English"]),
            country("AQ", "Antarctica", "AN", None, &[]),
        ]
    }

    fn codes(countries: &[&Country]) -> Vec<String> {
        countries.iter().map(|c| c.code.clone()).collect()
    }

    #[test]
    fn empty_state_returns_everything_in_order() {
        let data = sample();
        let out = filter(&data, &FilterState::new());
        assert_eq!(codes(&out), ["FR", "BE", "DE", "CA", "US", "AQ"]);
    }

    #[test]
    fn facets_combine_with_and() {
        let data = sample();
        let state = FilterState::new()
            .with_continents(["EU"])
            .with_languages(["French"]);
        assert_eq!(codes(&filter(&data, &state)), ["FR", "BE"]);

        let state = state.with_search("bel");
        assert_eq!(codes(&filter(&data, &state)), ["BE"]);
    }

    #[test]
    fn filtering_a_filtered_slice_is_stable() {
        let data = sample();
        let state = FilterState::new().with_languages(["English", "German"]);
        let once = filter(&data, &state);
        let twice = filter(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn continent_options_ignore_continent_selection() {
        let data = sample();
        let state = FilterState::new()
            .with_continents(["EU"])
            .with_languages(["French"]);
        let options = continent_options(&data, &state);
        let values: Vec<(&str, usize, bool)> = options
            .iter()
            .map(|o| (o.value.as_str(), o.count, o.selected))
            .collect();
        assert_eq!(values, [("EU", 2, true), ("NA", 1, false)]);
    }

    #[test]
    fn language_options_are_ranked_by_count_then_name() {
        let data = sample();
        let options = language_options(&data, &FilterState::new());
        let values: Vec<(&str, usize)> = options.iter().map(|o| (o.value.as_str(), o.count)).collect();
        assert_eq!(
            values,
            [("French", 3), ("English", 2), ("German", 2), ("Dutch", 1)]
        );
    }

    #[test]
    fn currency_options_skip_missing_and_keep_stale_selection() {
        let data = sample();
        let state = FilterState::new()
            .with_continents(["NA"])
            .with_currencies(["EUR"]);
        let options = currency_options(&data, &state);
        let values: Vec<(&str, usize, bool)> = options
            .iter()
            .map(|o| (o.value.as_str(), o.count, o.selected))
            .collect();
        assert_eq!(values, [("CAD", 1, false), ("USD", 1, false), ("EUR", 0, true)]);
        assert!(filter(&data, &state).is_empty());
    }

    #[test]
    fn continent_options_skip_blank_codes() {
        let data = vec![
            country("FR", "France", "EU", Some("EUR"), &["French"]),
            country("X1", "Nowhere", "", None, &[]),
            country("X2", "Elsewhere", "  ", None, &[]),
        ];
        let options = continent_options(&data, &FilterState::new());
        let values: Vec<(&str, usize)> = options.iter().map(|o| (o.value.as_str(), o.count)).collect();
        assert_eq!(values, [("EU", 1)]);
    }

    #[test]
    fn options_ignore_search_term() {
        let data = sample();
        let state = FilterState::new().with_search("zzz");
        assert!(filter(&data, &state).is_empty());
        assert_eq!(facet_counts(&data, &state).continents.len(), 3);
    }

    #[test]
    fn active_filter_detection() {
        assert!(!has_active_filters(&FilterState::new()));
        assert!(has_active_filters(&FilterState::new().with_search("a")));
        assert!(has_active_filters(&FilterState::new().with_currencies(["EUR"])));
    }

    #[test]
    fn search_by_name_ignores_facets() {
        let data = sample();
        assert_eq!(codes(&search_by_name(&data, "AN")), ["FR", "DE", "CA", "AQ"]);
    }
}
