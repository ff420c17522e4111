//! worldfacets-cli
//! ===============
//!
//! Command-line interface for the `worldfacets-core` filter and analytics
//! engine.
//!
//! This crate primarily provides a binary (`worldfacets`). The small library
//! target exists so that docs.rs renders a documentation page with this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! worldfacets --help
//! worldfacets stats
//! worldfacets --continent EU --language French countries
//! worldfacets -l English,French overlap
//! worldfacets --input countries.json build world.bin
//! ```
//!
//! For programmatic access use the [`worldfacets-core`] crate directly.
//!
//! [`worldfacets-core`]: https://docs.rs/worldfacets-core
