// crates/worldfacets-core/src/loader/json.rs

// This entire file is skipped if the 'json' feature is missing.
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::{Snapshot, WorldDb};
use log::info;
use serde::Deserialize;
use std::io::Read;

/// Accepted top-level shapes: the raw GraphQL response or the bare payload.
///
/// The envelope is tried first; a bare snapshot has no `data` key, so it
/// falls through to the second arm.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Envelope { data: Snapshot },
    Bare(Snapshot),
}

impl Payload {
    fn into_snapshot(self) -> Snapshot {
        match self {
            Payload::Envelope { data } => data,
            Payload::Bare(snapshot) => snapshot,
        }
    }
}

impl WorldDb {
    /// Parse a snapshot from JSON text.
    ///
    /// ```
    /// use worldfacets_core::WorldDb;
    ///
    /// let db = WorldDb::from_json_str(
    ///     r#"{"data":{"continents":[{"code":"EU","name":"Europe"}],
    ///        "countries":[{"code":"FR","name":"France",
    ///                      "continent":{"code":"EU","name":"Europe"},
    ///                      "currency":"EUR","languages":[{"name":"French"}]}]}}"#,
    /// )?;
    /// assert_eq!(db.country_count(), 1);
    /// # Ok::<(), worldfacets_core::FacetError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let payload: Payload = serde_json::from_str(json)?;
        Self::from_snapshot(payload.into_snapshot())
    }

    /// Parse a snapshot from any reader (already decompressed).
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let payload: Payload = serde_json::from_reader(reader)?;
        let db = Self::from_snapshot(payload.into_snapshot())?;
        info!("loaded JSON snapshot with {} countries", db.country_count());
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FacetError;

    const BARE: &str = r#"{
        "continents": [{"code": "NA", "name": "North America"}],
        "countries": [{
            "code": "CA", "name": "Canada",
            "continent": {"code": "NA", "name": "North America"},
            "capital": "Ottawa", "currency": "CAD", "phone": "1", "emoji": "🇨🇦",
            "languages": [
                {"name": "English", "native": "English", "rtl": false},
                {"name": "French", "native": "Français", "rtl": false}
            ]
        }]
    }"#;

    #[test]
    fn bare_snapshot_parses() {
        let db = WorldDb::from_json_str(BARE).unwrap();
        let ca = db.find_country("ca").unwrap();
        assert_eq!(ca.capital(), Some("Ottawa"));
        assert_eq!(ca.languages()[1].native(), Some("Français"));
    }

    #[test]
    fn envelope_and_bare_agree() {
        let wrapped = format!(r#"{{"data": {BARE}}}"#);
        assert_eq!(
            WorldDb::from_json_str(&wrapped).unwrap(),
            WorldDb::from_json_str(BARE).unwrap()
        );
    }

    #[test]
    fn nulls_and_missing_optionals_are_accepted() {
        let db = WorldDb::from_json_str(
            r#"{"countries":[{"code":"AQ","name":"Antarctica",
                "continent":{"code":"AN","name":"Antarctica"},
                "capital":null,"currency":null}]}"#,
        )
        .unwrap();
        let aq = &db.countries()[0];
        assert_eq!(aq.currency(), None);
        assert!(aq.languages().is_empty());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            WorldDb::from_json_str("{\"countries\": [1, 2"),
            Err(FacetError::Json(_))
        ));
    }
}
