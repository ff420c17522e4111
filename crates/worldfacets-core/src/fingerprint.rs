// crates/worldfacets-core/src/fingerprint.rs
//! Content fingerprints and a single-slot memo for callers that re-render
//! often (e.g. on every keystroke of the search box).
//!
//! The engine functions never cache anything themselves; this module only
//! gives their callers a cheap key to decide when recomputation is needed.

use crate::model::Country;
use crate::state::FilterState;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Length plus ordered country codes. Two collections with the same
    /// codes in the same order are treated as equal content.
    pub fn of_countries<C: Borrow<Country>>(countries: &[C]) -> Self {
        let mut h = DefaultHasher::new();
        countries.len().hash(&mut h);
        for c in countries.iter().map(<C as Borrow<Country>>::borrow) {
            c.code.hash(&mut h);
        }
        Self(h.finish())
    }

    /// Every field of the filter state, including selection order.
    pub fn of_state(state: &FilterState) -> Self {
        let mut h = DefaultHasher::new();
        state.hash(&mut h);
        Self(h.finish())
    }

    /// Order-sensitive combination of two fingerprints.
    pub fn combine(self, other: Fingerprint) -> Self {
        let mut h = DefaultHasher::new();
        self.0.hash(&mut h);
        other.0.hash(&mut h);
        Self(h.finish())
    }
}

/// Caller-owned single-slot cache keyed by a [`Fingerprint`].
#[derive(Debug, Clone)]
pub struct Memo<V> {
    slot: Option<(Fingerprint, V)>,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Memo<V> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the cached value for `key`, computing it first if the key
    /// changed (or nothing is cached yet).
    pub fn get_or_compute<F>(&mut self, key: Fingerprint, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        if self.key() != Some(key) {
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| (key, compute()));
        value
    }

    pub fn key(&self) -> Option<Fingerprint> {
        self.slot.as_ref().map(|(k, _)| *k)
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
