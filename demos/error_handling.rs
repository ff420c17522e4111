//! Error handling example for worldfacets-rs
//!
//! Shows which operations can fail (loading, persisting, constructing
//! pagination) and how degenerate input is handled by the infallible engine.

use worldfacets_rs::prelude::*;

fn main() {
    println!("=== worldfacets-rs Error Handling Example ===\n");

    // 1. Missing file
    match WorldDb::load_from_path("/nonexistent/world.json") {
        Ok(_) => println!("unexpectedly loaded"),
        Err(FacetError::NotFound(msg)) => println!("✓ NotFound: {msg}"),
        Err(e) => println!("other error: {e}"),
    }

    // 2. Unsupported format
    if let Err(e) = WorldDb::load_from_path("world.csv") {
        println!("✓ {e}");
    }

    // 3. Malformed JSON
    if let Err(e) = WorldDb::from_json_str("{\"countries\": [") {
        println!("✓ {e}");
    }

    // 4. Duplicate country codes
    let dup = r#"{"countries":[
        {"code":"XX","name":"One","continent":{"code":"EU","name":"Europe"}},
        {"code":"XX","name":"Two","continent":{"code":"EU","name":"Europe"}}]}"#;
    match WorldDb::from_json_str(dup) {
        Err(FacetError::DuplicateCountry(code)) => println!("✓ duplicate code rejected: {code}"),
        other => println!("unexpected: {other:?}"),
    }

    // 5. Zero batch size
    if let Err(e) = PaginationState::new(0, 10) {
        println!("✓ {e}");
    }

    // 6. The engine itself never fails: empty input gives empty results
    let none: Vec<Country> = Vec::new();
    let diversity = currency_diversity(&none);
    println!(
        "\nEmpty collection: {} currencies, most common {}, average languages {}",
        diversity.total_currencies,
        diversity.most_common_label(),
        countries_with_many_languages(&none).average_label()
    );

    // 7. Unknown facet values simply match nothing
    if let Ok(db) = WorldDb::load() {
        let state = FilterState::new().with_continents(["ZZ"]);
        let hits = filter(db.countries(), &state);
        println!("Unknown continent matched {} countries", hits.len());
        println!("{}", no_results_message(&state, db.continents()));
        for hint in filter_suggestions(&state) {
            println!("  - {hint}");
        }
    }
}
