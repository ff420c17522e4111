//! worldfacets: command-line front end for worldfacets-core
//!
//! Loads a country snapshot, applies the facet selections given on the
//! command line and prints the filtered list or one of the analytics views.
//!
//! Usage examples
//! --------------
//!
//! - Dataset totals
//!   $ worldfacets stats
//!
//! - European countries speaking French, two batches of 20
//!   $ worldfacets --continent EU --language French countries --pages 2
//!
//! - Option counts for each facet given the other selections
//!   $ worldfacets -c EU -l French,German facets
//!
//! - Countries speaking at least two of the selected languages
//!   $ worldfacets -l English,French overlap
//!
//! - Convert a JSON snapshot to a binary one
//!   $ worldfacets --input countries.json build world.bin
//!
//! Data source
//! -----------
//!
//! Without `--input` the dataset bundled with `worldfacets-core` is used.
//! Every facet flag may be repeated or given a comma-separated list.
mod args;
mod logger;

use crate::args::{CliArgs, Commands, FilterArgs};
use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::Path;
use worldfacets_core::aggregate::{
    continent_chart_data, group_currencies_by_letter, unique_currencies,
};
use worldfacets_core::filter::FacetOption;
use worldfacets_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init(args.verbose);

    let db = load_db(args.input.as_deref())?;
    let state = build_state(&args.filters);
    info!("filters: {}", filter_summary(&state, db.continents()));

    let filtered = filter(db.countries(), &state);

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Continents: {}", stats.continents);
            println!("  Languages: {}", stats.languages);
            println!("  Currencies: {}", stats.currencies);
            if has_active_filters(&state) {
                println!("  Matching current filters: {}", filtered.len());
            }
        }

        Commands::Countries { batch_size, pages } => {
            let total = filtered.len();
            let page = reveal_pages(batch_size, total, pages)?;
            for c in page.visible(&filtered) {
                println!(
                    "{} {} ({}), {}, {}",
                    c.emoji().unwrap_or(" "),
                    c.name(),
                    c.code(),
                    db.continent_name(c.continent_code()),
                    c.currency().unwrap_or("no currency")
                );
            }
            if total == 0 {
                println!("{}", no_results_message(&state, db.continents()));
            } else {
                println!("-- showing {} of {} --", page.revealed(), total);
                if page.has_more() {
                    println!("   ({} more; use --pages {})", page.remaining(total), pages + 1);
                }
            }
        }

        Commands::Facets => {
            let counts = facet_counts(db.countries(), &state);
            for facet in Facet::ALL {
                println!("{}:", facet.label());
                print_options(counts.get(facet));
            }
        }

        Commands::Continents => {
            let stats = continent_stats(&filtered, db.continents());
            let bars = continent_chart_data(&stats);
            for (stat, bar) in stats.iter().zip(&bars) {
                println!(
                    "{:<15} {:>4} countries  {:>3} languages  {:>3} currencies  {}",
                    stat.continent.name,
                    stat.country_count,
                    stat.unique_languages,
                    stat.unique_currencies,
                    bar.color
                );
            }
        }

        Commands::Languages => {
            let dist = language_distribution(&filtered);
            if dist.is_empty() {
                println!("No language data.");
            }
            for d in dist {
                println!("{:<20} {:>4}  {:>5.1}%", d.language, d.count, d.percentage);
            }
        }

        Commands::Currencies { by_letter } => {
            if by_letter {
                let codes = unique_currencies(&filtered);
                for (letter, group) in group_currencies_by_letter(&codes) {
                    println!("{letter}: {}", group.join(" "));
                }
            } else {
                let diversity = currency_diversity(&filtered);
                println!("Distinct currencies: {}", diversity.total_currencies);
                println!("Most common: {}", diversity.most_common_label());
                for c in &diversity.distribution {
                    println!("  {:<12} {:>4}", c.currency, c.count);
                }
            }
        }

        Commands::Multilingual => {
            let richness = countries_with_many_languages(&filtered);
            println!("Average languages per country: {}", richness.average_label());
            for entry in &richness.top_countries {
                println!(
                    "  {:<20} {:>2}  {}",
                    entry.country.name(),
                    entry.language_count,
                    entry.languages.join(", ")
                );
            }
        }

        Commands::Overlap => {
            let selected = state.selected_languages();
            if selected.len() < 2 {
                eprintln!("Select at least two languages (e.g. --language English,French)");
            } else {
                let overlap = with_multiple_selected_languages(&filtered, selected);
                if overlap.is_empty() {
                    println!("No country speaks two or more of: {}", selected.join(", "));
                }
                for o in overlap {
                    println!(
                        "{} ({}): {}",
                        o.country.name(),
                        o.country.code(),
                        o.matched_languages.join(", ")
                    );
                }
            }
        }

        Commands::Summary => {
            println!("{}", filter_summary(&state, db.continents()));
            println!("{} of {} countries match", filtered.len(), db.country_count());
            if filtered.is_empty() {
                println!("{}", no_results_message(&state, db.continents()));
                for hint in filter_suggestions(&state) {
                    println!("  - {hint}");
                }
            }
        }

        Commands::Build { out } => {
            db.save_as(&out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            println!("Wrote {} countries to {}", db.country_count(), out.display());
        }
    }

    Ok(())
}

fn load_db(input: Option<&Path>) -> anyhow::Result<WorldDb> {
    match input {
        Some(path) => WorldDb::load_from_path(path)
            .with_context(|| format!("loading snapshot from {}", path.display())),
        None => load_bundled(),
    }
}

#[cfg(feature = "json")]
fn load_bundled() -> anyhow::Result<WorldDb> {
    Ok(WorldDb::load()?)
}

#[cfg(not(feature = "json"))]
fn load_bundled() -> anyhow::Result<WorldDb> {
    anyhow::bail!("no --input given and the bundled dataset needs the `json` feature")
}

fn build_state(filters: &FilterArgs) -> FilterState {
    let clean = |values: &[String]| -> Vec<String> {
        values
            .iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    };
    FilterState::new()
        .with_search(filters.search.clone().unwrap_or_default())
        .with_continents(clean(&filters.continents))
        .with_languages(clean(&filters.languages))
        .with_currencies(clean(&filters.currencies))
}

/// Pagination state after `pages` batches, stopping early once exhausted.
fn reveal_pages(batch_size: usize, total: usize, pages: usize) -> worldfacets_core::Result<PaginationState> {
    let mut page = PaginationState::new(batch_size, total)?;
    for _ in 1..pages {
        if !page.has_more() {
            break;
        }
        page = page.load_more(total);
    }
    Ok(page)
}

fn print_options(options: &[FacetOption]) {
    if options.is_empty() {
        println!("  (none)");
    }
    for o in options {
        let mark = if o.selected { "[x]" } else { "[ ]" };
        println!("  {mark} {} ({})", o.value, o.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_flags_trims_and_drops_blanks() {
        let filters = FilterArgs {
            search: Some("land".into()),
            continents: vec![" EU ".into(), "".into()],
            languages: vec!["French".into(), "French".into()],
            currencies: vec![],
        };
        let state = build_state(&filters);
        assert_eq!(state.search_term(), "land");
        assert_eq!(state.selected_continents(), ["EU"]);
        assert_eq!(state.selected_languages(), ["French"]);
        assert!(state.selected_currencies().is_empty());
    }

    #[test]
    fn reveal_pages_stops_once_everything_is_visible() {
        let page = reveal_pages(20, 45, usize::MAX).unwrap();
        assert_eq!(page.revealed(), 45);
        assert!(!page.has_more());

        let page = reveal_pages(20, 45, 2).unwrap();
        assert_eq!(page.revealed(), 40);
        assert!(page.has_more());
    }
}
