// crates/worldfacets-core/src/model.rs
use crate::common::DbStats;
use crate::error::{FacetError, Result};
use crate::text::non_blank;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A continent, both as an entry of the continent list and as the reference
/// embedded in every [`Country`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Continent {
    pub code: String,
    pub name: String,
}

impl Continent {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A spoken language. `name` is the join key across countries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub rtl: Option<bool>,
}

impl Language {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native: None,
            rtl: None,
        }
    }

    pub fn native(&self) -> Option<&str> {
        non_blank(&self.native)
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl.unwrap_or(false)
    }
}

/// A country record as delivered by the upstream snapshot.
///
/// Optional scalars may be missing or blank upstream; the accessors below
/// report both cases as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub continent: Continent,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn continent_code(&self) -> &str {
        &self.continent.code
    }

    pub fn capital(&self) -> Option<&str> {
        non_blank(&self.capital)
    }

    pub fn currency(&self) -> Option<&str> {
        non_blank(&self.currency)
    }

    pub fn phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    pub fn emoji(&self) -> Option<&str> {
        non_blank(&self.emoji)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Language names in upstream order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.iter().map(|l| l.name.as_str())
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l.name == language)
    }
}

/// The upstream payload: every country plus the continent list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub continents: Vec<Continent>,
}

/// The in-memory dataset the engine operates on.
///
/// Built once from a [`Snapshot`]; afterwards it is only read. Constructed by
/// the loader module from the bundled JSON dataset or from a file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldDb {
    countries: Vec<Country>,
    continents: Vec<Continent>,
}

impl WorldDb {
    /// Validate and take ownership of an upstream snapshot.
    ///
    /// Country codes must be unique. Continent codes used by countries but
    /// missing from the continent list are accepted and logged.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let Snapshot {
            countries,
            continents,
        } = snapshot;

        let mut seen = HashSet::with_capacity(countries.len());
        for c in &countries {
            if !seen.insert(c.code.as_str()) {
                return Err(FacetError::DuplicateCountry(c.code.clone()));
            }
        }

        let known: HashSet<&str> = continents.iter().map(|c| c.code.as_str()).collect();
        let mut unresolved: Vec<&str> = countries
            .iter()
            .map(Country::continent_code)
            .filter(|code| !known.contains(code))
            .collect();
        unresolved.sort_unstable();
        unresolved.dedup();
        if !unresolved.is_empty() {
            warn!(
                "{} continent code(s) not in continent list: {}",
                unresolved.len(),
                unresolved.join(", ")
            );
        }

        debug!(
            "snapshot accepted: {} countries, {} continents",
            countries.len(),
            continents.len()
        );
        Ok(Self {
            countries,
            continents,
        })
    }

    /// All countries, in upstream order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// The continent list, in upstream order.
    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Find a country by code, case-insensitive (e.g. "DE", "us").
    pub fn find_country(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn find_continent(&self, code: &str) -> Option<&Continent> {
        self.continents
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Display name for a continent code; unresolved codes are shown as-is.
    pub fn continent_name<'a>(&'a self, code: &'a str) -> &'a str {
        resolve_continent_name(&self.continents, code)
    }

    /// Aggregate totals for the whole dataset.
    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            continents: self.continents.len(),
            languages: crate::aggregate::distinct_language_count(&self.countries),
            currencies: crate::aggregate::unique_currencies(&self.countries).len(),
        }
    }

    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            countries: self.countries,
            continents: self.continents,
        }
    }
}

/// Look up a continent name in a list, falling back to the code itself.
pub fn resolve_continent_name<'a>(continents: &'a [Continent], code: &'a str) -> &'a str {
    continents
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.name.as_str())
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, continent: &str) -> Country {
        Country {
            code: code.into(),
            name: code.into(),
            continent: Continent::new(continent, continent),
            capital: None,
            currency: Some("  ".into()),
            phone: None,
            emoji: None,
            languages: vec![Language::named("English")],
        }
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let snapshot = Snapshot {
            countries: vec![country("AA", "EU"), country("AA", "EU")],
            continents: vec![Continent::new("EU", "Europe")],
        };
        match WorldDb::from_snapshot(snapshot) {
            Err(FacetError::DuplicateCountry(code)) => assert_eq!(code, "AA"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn unresolved_continent_is_accepted_and_named_by_code() {
        let snapshot = Snapshot {
            countries: vec![country("AA", "XX")],
            continents: vec![Continent::new("EU", "Europe")],
        };
        let db = WorldDb::from_snapshot(snapshot).unwrap();
        assert_eq!(db.continent_name("XX"), "XX");
        assert_eq!(db.continent_name("EU"), "Europe");
        assert!(db.find_continent("xx").is_none());
    }

    #[test]
    fn blank_currency_reads_as_absent() {
        let c = country("AA", "EU");
        assert_eq!(c.currency(), None);
        assert!(c.speaks("English"));
        assert!(!c.speaks("english"));
    }

    #[test]
    fn find_country_is_case_insensitive() {
        let snapshot = Snapshot {
            countries: vec![country("DE", "EU")],
            continents: vec![],
        };
        let db = WorldDb::from_snapshot(snapshot).unwrap();
        assert!(db.find_country("de").is_some());
        assert!(db.find_country(" ").is_none());
    }
}
