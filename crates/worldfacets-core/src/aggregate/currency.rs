// crates/worldfacets-core/src/aggregate/currency.rs
use super::{tally, TOP_N};
use crate::model::Country;
use log::debug;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyCount {
    pub currency: String,
    pub count: usize,
}

/// Result of [`currency_diversity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyDiversity {
    /// Number of distinct currency codes.
    pub total_currencies: usize,
    pub most_common: Option<CurrencyCount>,
    /// Top [`TOP_N`] codes by country count.
    pub distribution: Vec<CurrencyCount>,
}

impl CurrencyDiversity {
    pub fn most_common_label(&self) -> &str {
        self.most_common
            .as_ref()
            .map(|c| c.currency.as_str())
            .unwrap_or("N/A")
    }
}

fn currencies_of<C: Borrow<Country>>(countries: &[C]) -> impl Iterator<Item = &str> {
    countries
        .iter()
        .map(<C as Borrow<Country>>::borrow)
        .filter_map(Country::currency)
}

/// Currency usage across the collection. Countries without a currency are
/// ignored; ties keep encounter order.
pub fn currency_diversity<C: Borrow<Country>>(countries: &[C]) -> CurrencyDiversity {
    let mut counts = tally(currencies_of(countries));
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total_currencies = counts.len();
    let distribution: Vec<CurrencyCount> = counts
        .into_iter()
        .take(TOP_N)
        .map(|(currency, count)| CurrencyCount {
            currency: currency.to_string(),
            count,
        })
        .collect();

    debug!("currency_diversity: {total_currencies} distinct codes");
    CurrencyDiversity {
        total_currencies,
        most_common: distribution.first().cloned(),
        distribution,
    }
}

/// Distinct currency codes, sorted.
pub fn unique_currencies<C: Borrow<Country>>(countries: &[C]) -> Vec<String> {
    currencies_of(countries)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Countries using `currency` (compared after trimming).
pub fn countries_by_currency<'a, C: Borrow<Country>>(
    countries: &'a [C],
    currency: &str,
) -> Vec<&'a Country> {
    let wanted = currency.trim();
    countries
        .iter()
        .map(<C as Borrow<Country>>::borrow)
        .filter(|c| c.currency() == Some(wanted))
        .collect()
}

/// Number of countries per currency code.
pub fn currency_counts<C: Borrow<Country>>(countries: &[C]) -> BTreeMap<String, usize> {
    let mut out = BTreeMap::new();
    for currency in currencies_of(countries) {
        *out.entry(currency.to_string()).or_insert(0) += 1;
    }
    out
}

/// Group codes by their uppercased first letter, each group sorted.
///
/// Used for tabbed currency pickers. Blank codes are skipped.
pub fn group_currencies_by_letter<S: AsRef<str>>(currencies: &[S]) -> BTreeMap<char, Vec<String>> {
    let mut groups: BTreeMap<char, Vec<String>> = BTreeMap::new();
    for currency in currencies {
        let currency = currency.as_ref().trim();
        if let Some(first) = currency.chars().next() {
            let letter = first.to_uppercase().next().unwrap_or(first);
            groups.entry(letter).or_default().push(currency.to_string());
        }
    }
    for group in groups.values_mut() {
        group.sort();
    }
    groups
}
