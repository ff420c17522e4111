// crates/worldfacets-core/src/state.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable filtering dimension. The free-text name search is not a
/// facet: it has no option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Continent,
    Language,
    Currency,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Continent, Facet::Language, Facet::Currency];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Continent => "continent",
            Facet::Language => "language",
            Facet::Currency => "currency",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The caller-owned selection: a search term plus one set of selected values
/// per facet.
///
/// Selections keep insertion order and never contain duplicates; all
/// mutation goes through the methods below to preserve that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    selected_continents: Vec<String>,
    #[serde(default)]
    selected_languages: Vec<String>,
    #[serde(default)]
    selected_currencies: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_continents<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for code in codes {
            self.select(Facet::Continent, code);
        }
        self
    }

    pub fn with_languages<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.select(Facet::Language, name);
        }
        self
    }

    pub fn with_currencies<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for code in codes {
            self.select(Facet::Currency, code);
        }
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_continents(&self) -> &[String] {
        &self.selected_continents
    }

    pub fn selected_languages(&self) -> &[String] {
        &self.selected_languages
    }

    pub fn selected_currencies(&self) -> &[String] {
        &self.selected_currencies
    }

    pub fn selected(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Continent => &self.selected_continents,
            Facet::Language => &self.selected_languages,
            Facet::Currency => &self.selected_currencies,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Continent => &mut self.selected_continents,
            Facet::Language => &mut self.selected_languages,
            Facet::Currency => &mut self.selected_currencies,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).iter().any(|v| v == value)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Add a value to a facet selection. Returns `false` if it was already
    /// selected.
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.selected_mut(facet);
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Remove a value from a facet selection. Returns `false` if it was not
    /// selected.
    pub fn deselect(&mut self, facet: Facet, value: &str) -> bool {
        let values = self.selected_mut(facet);
        let before = values.len();
        values.retain(|v| v != value);
        values.len() != before
    }

    /// Flip a value in or out of a facet selection. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        if self.deselect(facet, value) {
            false
        } else {
            self.select(facet, value)
        }
    }

    pub fn toggle_continent(&mut self, code: &str) -> bool {
        self.toggle(Facet::Continent, code)
    }

    pub fn toggle_language(&mut self, name: &str) -> bool {
        self.toggle(Facet::Language, name)
    }

    pub fn toggle_currency(&mut self, code: &str) -> bool {
        self.toggle(Facet::Currency, code)
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        self.selected_mut(facet).clear();
    }

    /// Reset to "no filter".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// `true` if any facet has a selection. The search term is not counted.
    pub fn has_facet_selection(&self) -> bool {
        Facet::ALL.iter().any(|f| !self.selected(*f).is_empty())
    }
}
