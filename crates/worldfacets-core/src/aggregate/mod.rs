// crates/worldfacets-core/src/aggregate/mod.rs

//! # Aggregation Engine
//!
//! Analytics over an arbitrary country collection: usually the filtered set,
//! sometimes the whole dataset. Every function here is pure; identical input
//! yields identical output, so callers can memoize on a
//! [`Fingerprint`](crate::fingerprint::Fingerprint).

use crate::model::Country;
use std::collections::HashMap;

mod chart;
mod continent;
mod currency;
mod language;

pub use chart::{continent_chart_data, ContinentBar, CHART_PALETTE};
pub use continent::{continent_stats, ContinentStat};
pub use currency::{
    countries_by_currency, currency_counts, currency_diversity, group_currencies_by_letter,
    unique_currencies, CurrencyCount, CurrencyDiversity,
};
pub use language::{
    all_languages, countries_with_many_languages, distinct_language_count,
    language_distribution, LanguageCount, LanguageRichness, LanguageShare, MultilingualEntry,
};

/// How many entries the "top N" distributions keep.
pub const TOP_N: usize = 10;

/// How many countries [`countries_with_many_languages`] lists.
pub const TOP_MULTILINGUAL: usize = 5;

/// Count occurrences, keeping values in first-encounter order.
///
/// Sorting the result with a stable sort therefore breaks ties by encounter
/// order.
pub(crate) fn tally<'a, I>(values: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<(&'a str, usize)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&i) => out[i].1 += 1,
            None => {
                index.insert(value, out.len());
                out.push((value, 1));
            }
        }
    }
    out
}

/// A country's language names with blanks and repeats removed, in upstream
/// order.
pub(crate) fn distinct_languages_of(country: &Country) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::with_capacity(country.languages.len());
    for name in country.language_names() {
        if !name.trim().is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
