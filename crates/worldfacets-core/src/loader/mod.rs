// crates/worldfacets-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression) and delegates to the
//! payload parsers (bincode vs JSON). Everything here is fallible; the engine
//! modules downstream never are.

use crate::error::{FacetError, Result};
use crate::model::WorldDb;
use std::path::{Path, PathBuf};

mod binary;
mod common_io;
mod json;

#[cfg(feature = "json")]
static WORLD_DB_CACHE: once_cell::sync::OnceCell<WorldDb> = once_cell::sync::OnceCell::new();

/// The bundled sample dataset, in upstream GraphQL response format.
#[cfg(feature = "json")]
const BUNDLED_JSON: &str = include_str!("../../data/countries.json");

impl WorldDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Load the bundled sample dataset.
    ///
    /// The JSON is compiled into the binary and decoded once per process;
    /// later calls clone the cached value.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        WORLD_DB_CACHE
            .get_or_try_init(|| Self::from_json_str(BUNDLED_JSON))
            .cloned()
    }

    /// Load a snapshot file, choosing the parser by extension:
    /// `.json` / `.json.gz` are upstream JSON, `.bin` is a snapshot written by
    /// [`WorldDb::save_as`]. Gzip is detected from the file content.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = common_io::file_name_lower(path);

        if name.ends_with(".json") || name.ends_with(".json.gz") {
            #[cfg(feature = "json")]
            {
                let reader = common_io::open_stream(path)?;
                return Self::from_json_reader(reader);
            }
            #[cfg(not(feature = "json"))]
            {
                return Err(FacetError::InvalidData(format!(
                    "{} is JSON; enable the `json` feature",
                    path.display()
                )));
            }
        }

        if name.ends_with(".bin") || name.ends_with(".bin.gz") {
            let reader = common_io::open_stream(path)?;
            return binary::read_snapshot(reader);
        }

        Err(FacetError::InvalidData(format!(
            "unsupported snapshot format: {} (expected .json, .json.gz or .bin)",
            path.display()
        )))
    }

    /// Persist as a binary snapshot readable by [`WorldDb::load_from_path`].
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        binary::write_snapshot(self, path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("worldfacets-loader-{}-{name}", std::process::id()))
    }

    #[cfg(feature = "json")]
    #[test]
    fn bundled_dataset_loads_and_is_cached() {
        let a = WorldDb::load().unwrap();
        let b = WorldDb::load().unwrap();
        assert_eq!(a, b);
        assert!(a.country_count() > 0);
        assert!(!a.continents().is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn binary_snapshot_survives_save_and_load() {
        let db = WorldDb::load().unwrap();
        let path = temp_path("world.bin");
        db.save_as(&path).unwrap();
        let back = WorldDb::load_from_path(&path).unwrap();
        assert_eq!(back, db);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = WorldDb::load_from_path("world.csv").err();
        assert!(matches!(err, Some(FacetError::InvalidData(_))));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = WorldDb::load_from_path(temp_path("absent.bin")).err();
        assert!(matches!(err, Some(FacetError::NotFound(_))));
    }
}
