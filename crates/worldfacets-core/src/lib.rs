// crates/worldfacets-core/src/lib.rs

//! # worldfacets-core
//!
//! A faceted filter-and-aggregation engine over an in-memory country
//! dataset.
//!
//! ```
//! use worldfacets_core::prelude::*;
//!
//! let db = WorldDb::load()?;
//! let state = FilterState::new()
//!     .with_continents(["EU"])
//!     .with_languages(["French", "German"]);
//!
//! let hits = filter(db.countries(), &state);
//! assert!(hits.iter().all(|c| c.continent_code() == "EU"));
//!
//! let both = with_multiple_selected_languages(&hits, state.selected_languages());
//! assert!(both.iter().any(|o| o.country.code == "CH"));
//! # Ok::<(), worldfacets_core::FacetError>(())
//! ```

pub mod aggregate;
pub mod common;
pub mod error;
pub mod filter;
pub mod fingerprint;
pub mod intersect;
pub mod loader; // The public loader
pub mod model;
pub mod pagination;
pub mod predicate;
pub mod state;
pub mod summary;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{FacetError, Result};
pub use crate::fingerprint::{Fingerprint, Memo};
pub use crate::model::{Continent, Country, Language, Snapshot, WorldDb};
pub use crate::pagination::{PaginationState, Phase, DEFAULT_BATCH_SIZE};
pub use crate::state::{Facet, FilterState};
pub use crate::traits::NameMatch;

/// Everything a typical caller needs in one import.
pub mod prelude {
    pub use crate::aggregate::{
        all_languages, continent_chart_data, continent_stats, countries_with_many_languages,
        currency_diversity, language_distribution, unique_currencies, ContinentStat,
        CurrencyDiversity, LanguageRichness, LanguageShare,
    };
    pub use crate::filter::{
        facet_counts, filter, has_active_filters, options_for_continent_facet,
        options_for_currency_facet, options_for_language_facet, FacetCounts, FacetOption,
    };
    pub use crate::intersect::{with_multiple_selected_languages, LanguageOverlap};
    pub use crate::summary::{filter_suggestions, filter_summary, no_results_message};
    pub use crate::{
        Continent, Country, Facet, FacetError, FilterState, Fingerprint, Language, Memo,
        NameMatch, PaginationState, Phase, Result, WorldDb, DEFAULT_BATCH_SIZE,
    };
}
