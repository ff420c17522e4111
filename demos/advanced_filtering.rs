//! Advanced filtering and analytics example for worldfacets-rs
//!
//! Demonstrates:
//! - Analytics over a filtered collection
//! - The language overlap report
//! - Caller-side memoization with `Fingerprint` and `Memo`

use worldfacets_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== worldfacets-rs Advanced Filtering Example ===\n");

    let db = WorldDb::load()?;

    // --- Continent statistics over the whole dataset ---
    println!("--- Countries per continent ---");
    for stat in continent_stats(db.countries(), db.continents()) {
        println!(
            "  {:<15} {:>3} countries, {:>2} languages, {:>2} currencies",
            stat.continent.name, stat.country_count, stat.unique_languages, stat.unique_currencies
        );
    }
    println!();

    // --- Language share inside Africa ---
    println!("--- Top languages in Africa ---");
    let africa = filter(db.countries(), &FilterState::new().with_continents(["AF"]));
    for share in language_distribution(&africa) {
        println!("  {:<16} {:>2}  {:>5.1}%", share.language, share.count, share.percentage);
    }
    println!();

    // --- Currency diversity ---
    let diversity = currency_diversity(db.countries());
    println!(
        "--- Currencies: {} distinct, most common {} ---\n",
        diversity.total_currencies,
        diversity.most_common_label()
    );

    // --- Multilingual countries ---
    let richness = countries_with_many_languages(db.countries());
    println!("--- Most multilingual (avg {}) ---", richness.average_label());
    for entry in &richness.top_countries {
        println!("  {} ({} languages)", entry.country.name(), entry.language_count);
    }
    println!();

    // --- Overlap: which countries speak several of the selected languages? ---
    println!("--- Speaking two or more of English / French / German ---");
    let state = FilterState::new().with_languages(["English", "French", "German"]);
    let hits = filter(db.countries(), &state);
    for o in with_multiple_selected_languages(&hits, state.selected_languages()) {
        println!("  {}: {}", o.country.name(), o.matched_languages.join(" + "));
    }
    println!();

    // --- Memoization keyed on the filter state ---
    println!("--- Memoized filtering ---");
    let mut memo: Memo<usize> = Memo::new();
    let steps = [
        FilterState::new().with_languages(["Spanish"]),
        FilterState::new().with_languages(["Spanish"]),
        FilterState::new().with_languages(["Spanish", "Arabic"]),
    ];
    for (step, state) in steps.iter().enumerate() {
        let key = Fingerprint::of_state(state);
        let count = *memo.get_or_compute(key, || {
            println!("  (recomputing)");
            filter(db.countries(), state).len()
        });
        println!("  step {step}: {count} matches");
    }

    Ok(())
}
