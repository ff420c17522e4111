// crates/worldfacets-core/src/aggregate/continent.rs
use super::distinct_languages_of;
use crate::model::{Continent, Country};
use log::debug;
use serde::Serialize;
use std::borrow::Borrow;

/// Per-continent summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentStat {
    pub continent: Continent,
    pub country_count: usize,
    /// Distinct language names, in first-encounter order.
    pub languages: Vec<String>,
    pub unique_languages: usize,
    /// Distinct currency codes, in first-encounter order.
    pub currencies: Vec<String>,
    pub unique_currencies: usize,
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// One [`ContinentStat`] per entry of `continents`, sorted by country count
/// descending.
///
/// The sort is stable, so continents with equal counts keep the order of
/// `continents`. Continents with no countries are still reported (count 0).
/// Countries whose continent is not in the list are not reported anywhere.
pub fn continent_stats<C: Borrow<Country>>(
    countries: &[C],
    continents: &[Continent],
) -> Vec<ContinentStat> {
    let mut stats: Vec<ContinentStat> = continents
        .iter()
        .map(|continent| {
            let mut country_count = 0;
            let mut languages: Vec<String> = Vec::new();
            let mut currencies: Vec<String> = Vec::new();

            for country in countries.iter().map(<C as Borrow<Country>>::borrow) {
                if country.continent_code() != continent.code {
                    continue;
                }
                country_count += 1;
                for name in distinct_languages_of(country) {
                    push_distinct(&mut languages, name);
                }
                if let Some(currency) = country.currency() {
                    push_distinct(&mut currencies, currency);
                }
            }

            ContinentStat {
                continent: continent.clone(),
                country_count,
                unique_languages: languages.len(),
                languages,
                unique_currencies: currencies.len(),
                currencies,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.country_count.cmp(&a.country_count));
    debug!(
        "continent_stats: {} continents over {} countries",
        stats.len(),
        countries.len()
    );
    stats
}
