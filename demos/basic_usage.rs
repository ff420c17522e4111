//! Basic usage example for worldfacets-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country dataset
//! - Narrow it with a search term and facet selections
//! - Read the cross-filtered option counts
//! - Reveal the result in batches

use worldfacets_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== worldfacets-rs Basic Usage Example ===\n");

    println!("Loading dataset...");
    let db = WorldDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} countries, {} continents, {} languages, {} currencies\n",
        stats.countries, stats.continents, stats.languages, stats.currencies
    );

    // Example 1: search by name
    println!("--- Example 1: Name search ---");
    let state = FilterState::new().with_search("land");
    for c in filter(db.countries(), &state) {
        println!("  {} ({})", c.name(), c.code());
    }
    println!();

    // Example 2: facets combine (OR within, AND across)
    println!("--- Example 2: Europe AND (French OR German) ---");
    let state = FilterState::new()
        .with_continents(["EU"])
        .with_languages(["French", "German"]);
    let hits = filter(db.countries(), &state);
    for c in &hits {
        println!("  {} speaks {:?}", c.name(), c.language_names().collect::<Vec<_>>());
    }
    println!("{}\n", filter_summary(&state, db.continents()));

    // Example 3: what each facet would offer next
    println!("--- Example 3: Cross-filtered option counts ---");
    let counts = facet_counts(db.countries(), &state);
    for facet in Facet::ALL {
        let options = counts.get(facet);
        let shown: Vec<String> = options
            .iter()
            .take(5)
            .map(|o| format!("{}{} ({})", if o.selected { "*" } else { "" }, o.value, o.count))
            .collect();
        println!("  {facet}: {}", shown.join(", "));
    }
    println!();

    // Example 4: batches of 20
    println!("--- Example 4: Pagination ---");
    let all = db.countries();
    let mut page = PaginationState::new(DEFAULT_BATCH_SIZE, all.len())?;
    println!("  showing {} of {}", page.visible(all).len(), all.len());
    while page.has_more() {
        page = page.load_more(all.len());
        println!("  showing {} of {}", page.revealed(), all.len());
    }

    Ok(())
}
