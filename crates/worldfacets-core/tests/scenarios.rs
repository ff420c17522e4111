//! End-to-end behaviour of the engine on small hand-built collections.

use worldfacets_core::aggregate::{continent_stats, currency_diversity, language_distribution};
use worldfacets_core::filter::filter;
use worldfacets_core::intersect::with_multiple_selected_languages;
use worldfacets_core::{Continent, Country, FilterState, Language, PaginationState, Phase};

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

#[test]
fn continent_and_language_combine_with_and() {
    let data = vec![
        country("A1", "Alpha", "A", Some("EUR"), &["French"]),
        country("A2", "Beta", "A", Some("EUR"), &["German"]),
        country("A3", "Gamma", "A", Some("CHF"), &["German", "French"]),
        country("B1", "Delta", "B", Some("CAD"), &["French"]),
        country("B2", "Epsilon", "B", Some("USD"), &["English"]),
    ];
    let state = FilterState::new()
        .with_continents(["A"])
        .with_languages(["French"]);

    let codes: Vec<&str> = filter(&data, &state).iter().map(|c| c.code()).collect();
    assert_eq!(codes, ["A1", "A3"]);
}

#[test]
fn empty_collection_gives_empty_analytics() {
    let none: Vec<Country> = Vec::new();
    assert!(continent_stats(&none, &[]).is_empty());
    assert!(language_distribution(&none).is_empty());

    let diversity = currency_diversity(&none);
    assert_eq!(diversity.total_currencies, 0);
    assert!(diversity.most_common.is_none());
    assert!(diversity.distribution.is_empty());
}

#[test]
fn batches_of_twenty_over_forty_five_rows() {
    let total = 45;
    let mut page = PaginationState::new(20, total).unwrap();
    let mut seen = vec![(page.revealed(), page.has_more())];
    for _ in 0..2 {
        page = page.load_more(total);
        seen.push((page.revealed(), page.has_more()));
    }
    assert_eq!(seen, [(20, true), (40, true), (45, false)]);
    assert_eq!(page.phase(), Phase::Exhausted);
}

#[test]
fn overlap_reports_only_countries_speaking_both() {
    let data = vec![
        country("CA", "Canada", "NA", Some("CAD"), &["English", "French"]),
        country("FR", "France", "EU", Some("EUR"), &["French"]),
    ];
    let selected = ["English", "French"];
    let state = FilterState::new().with_languages(selected);
    let filtered = filter(&data, &state);
    assert_eq!(filtered.len(), 2);

    let overlap = with_multiple_selected_languages(&filtered, &selected);
    assert_eq!(overlap.len(), 1);
    assert_eq!(overlap[0].country.code, "CA");
    assert_eq!(overlap[0].matched_languages, ["English", "French"]);
}

#[test]
fn missing_currency_only_affects_currency_views() {
    let data = vec![
        country("AQ", "Antarctica", "AN", None, &[]),
        country("ZZ", "Zedland", "AN", Some("ZZD"), &["Zed"]),
    ];
    let continents = [Continent::new("AN", "Antarctica")];
    let state = FilterState::new().with_currencies(["ZZD"]);

    let codes: Vec<&str> = filter(&data, &state).iter().map(|c| c.code()).collect();
    assert_eq!(codes, ["ZZ"]);

    let stats = continent_stats(&data, &continents);
    assert_eq!(stats[0].country_count, 2);
    assert_eq!(stats[0].currencies, ["ZZD"]);
}
