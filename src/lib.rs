//! Workspace umbrella crate: re-exports `worldfacets-core` so the demos can
//! `use worldfacets_rs::prelude::*`.

pub use worldfacets_core::*;
