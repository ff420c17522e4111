// crates/worldfacets-core/src/summary.rs
//! Human-readable descriptions of the active filters.

use crate::model::{resolve_continent_name, Continent};
use crate::state::FilterState;

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn continent_names(state: &FilterState, continents: &[Continent]) -> String {
    state
        .selected_continents()
        .iter()
        .map(|code| resolve_continent_name(continents, code))
        .collect::<Vec<_>>()
        .join(", ")
}

/// "a", "a and b", "a, b, and c".
fn join_parts(parts: &[String], both: bool) -> String {
    match parts {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] if both => format!("both {a} and {b}"),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// One-line summary of the facet selections, e.g.
/// `Filtered by 2 continents (Europe, Asia) and 1 language (French)`.
pub fn filter_summary(state: &FilterState, continents: &[Continent]) -> String {
    let mut parts = Vec::new();

    let n = state.selected_continents().len();
    if n > 0 {
        parts.push(format!(
            "{n} {} ({})",
            plural(n, "continent"),
            continent_names(state, continents)
        ));
    }
    let n = state.selected_languages().len();
    if n > 0 {
        parts.push(format!(
            "{n} {} ({})",
            plural(n, "language"),
            state.selected_languages().join(", ")
        ));
    }
    let n = state.selected_currencies().len();
    if n > 0 {
        parts.push(format!(
            "{n} {} ({})",
            if n == 1 { "currency" } else { "currencies" },
            state.selected_currencies().join(", ")
        ));
    }

    if parts.is_empty() {
        "No filters applied".to_string()
    } else {
        format!("Filtered by {}", join_parts(&parts, false))
    }
}

/// Message shown when the filtered set is empty, naming what was active.
pub fn no_results_message(state: &FilterState, continents: &[Continent]) -> String {
    let mut parts = Vec::new();

    if state.has_search() {
        parts.push(format!("search term \"{}\"", state.search_term()));
    }
    let n = state.selected_continents().len();
    if n > 0 {
        parts.push(format!(
            "{} ({})",
            plural(n, "continent"),
            continent_names(state, continents)
        ));
    }
    let n = state.selected_languages().len();
    if n > 0 {
        parts.push(format!(
            "{} ({})",
            plural(n, "language"),
            state.selected_languages().join(", ")
        ));
    }
    let n = state.selected_currencies().len();
    if n > 0 {
        parts.push(format!(
            "{} ({})",
            if n == 1 { "currency" } else { "currencies" },
            state.selected_currencies().join(", ")
        ));
    }

    if parts.is_empty() {
        "No countries found matching your search criteria.".to_string()
    } else {
        format!("No countries found matching {}.", join_parts(&parts, true))
    }
}

/// Hints for loosening the current filters.
pub fn filter_suggestions(state: &FilterState) -> Vec<&'static str> {
    let mut out = Vec::new();
    let continents = !state.selected_continents().is_empty();
    let languages = !state.selected_languages().is_empty();

    if state.has_search() {
        out.push("Try adjusting your search term or check for typos.");
    }
    if continents {
        out.push("Consider selecting different continents or clearing continent filters.");
    }
    if languages {
        out.push("Try selecting different languages or clearing language filters.");
    }
    if !state.selected_currencies().is_empty() {
        out.push("Try selecting different currencies or clearing currency filters.");
    }
    if continents && languages {
        out.push("The combination of selected continents and languages may be too restrictive.");
    }
    out
}
