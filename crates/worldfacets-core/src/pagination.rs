// crates/worldfacets-core/src/pagination.rs
//! # Pagination Controller
//!
//! Reveals an already materialized result set in fixed-size batches.
//!
//! The state is a plain value owned by the caller. Every transition takes it
//! by value and returns the successor, and every transition that knows the
//! collection size re-derives `has_more` from it, so the state never carries
//! a stale total.

use crate::error::{FacetError, Result};
use serde::Serialize;

/// Default batch: four rows of five cards.
pub const DEFAULT_BATCH_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// More rows can be revealed.
    Idle,
    /// A load-more request is in flight (presentation only).
    Revealing,
    /// Everything is visible.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaginationState {
    batch_size: usize,
    revealed: usize,
    has_more: bool,
    phase: Phase,
}

impl Default for PaginationState {
    /// Default batch size over an empty collection.
    fn default() -> Self {
        Self::settle(DEFAULT_BATCH_SIZE, 0, 0)
    }
}

impl PaginationState {
    /// Fresh state for a collection of `total` rows.
    pub fn new(batch_size: usize, total: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(FacetError::InvalidBatchSize);
        }
        Ok(Self::settle(batch_size, batch_size, total))
    }

    /// Clamp `revealed` into `0..=total` and derive the rest from it.
    fn settle(batch_size: usize, revealed: usize, total: usize) -> Self {
        let revealed = revealed.min(total);
        let has_more = revealed < total;
        Self {
            batch_size,
            revealed,
            has_more,
            phase: if has_more { Phase::Idle } else { Phase::Exhausted },
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of rows currently visible.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Revealing
    }

    /// Back to the first batch. Callers do this on every filter change.
    #[must_use]
    pub fn reset(self, total: usize) -> Self {
        Self::settle(self.batch_size, self.batch_size, total)
    }

    /// Idle → Revealing. No-op in any other phase.
    #[must_use]
    pub fn begin_load_more(self) -> Self {
        match self.phase {
            Phase::Idle => Self {
                phase: Phase::Revealing,
                ..self
            },
            Phase::Revealing | Phase::Exhausted => self,
        }
    }

    /// Revealing → Idle/Exhausted, revealing one more batch.
    ///
    /// Outside of Revealing this only re-derives the state against `total`.
    #[must_use]
    pub fn finish_load_more(self, total: usize) -> Self {
        match self.phase {
            Phase::Revealing => Self::settle(
                self.batch_size,
                self.revealed.saturating_add(self.batch_size),
                total,
            ),
            Phase::Idle | Phase::Exhausted => Self::settle(self.batch_size, self.revealed, total),
        }
    }

    /// Reveal one more batch in a single step. A no-op once exhausted.
    #[must_use]
    pub fn load_more(self, total: usize) -> Self {
        let current = Self::settle(self.batch_size, self.revealed, total);
        if !current.has_more {
            return current;
        }
        current.begin_load_more().finish_load_more(total)
    }

    /// The visible prefix of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.revealed.min(items.len())]
    }

    /// Rows still hidden out of `total`.
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_batch_is_rejected() {
        assert!(matches!(
            PaginationState::new(0, 10),
            Err(FacetError::InvalidBatchSize)
        ));
    }

    #[test]
    fn constructed_states_stay_within_total() {
        let states = [
            PaginationState::default(),
            PaginationState::new(50, 7).unwrap(),
            PaginationState::new(3, 0).unwrap(),
        ];
        for p in states {
            assert!(p.batch_size() > 0);
            assert_eq!(p.has_more(), p.phase() == Phase::Idle);
        }
        assert_eq!(PaginationState::new(50, 7).unwrap().revealed(), 7);
    }

    #[test]
    fn reveals_in_batches_and_clamps() {
        let total = 45;
        let mut p = PaginationState::new(20, total).unwrap();
        assert_eq!((p.revealed(), p.has_more()), (20, true));

        p = p.load_more(total);
        assert_eq!((p.revealed(), p.has_more()), (40, true));
        assert_eq!(p.phase(), Phase::Idle);

        p = p.load_more(total);
        assert_eq!((p.revealed(), p.has_more()), (45, false));
        assert_eq!(p.phase(), Phase::Exhausted);

        // exhausted: no-op
        let again = p.load_more(total);
        assert_eq!(again, p);
    }

    #[test]
    fn small_collections_start_exhausted() {
        let p = PaginationState::new(20, 7).unwrap();
        assert_eq!(p.revealed(), 7);
        assert!(!p.has_more());
        assert_eq!(p.phase(), Phase::Exhausted);

        let empty = PaginationState::new(20, 0).unwrap();
        assert_eq!(empty.revealed(), 0);
        assert!(!empty.has_more());
    }

    #[test]
    fn two_step_load_passes_through_revealing() {
        let p = PaginationState::new(10, 25).unwrap().begin_load_more();
        assert!(p.is_loading());
        // a second begin is ignored
        assert_eq!(p.begin_load_more(), p);
        let p = p.finish_load_more(25);
        assert_eq!(p.revealed(), 20);
        assert_eq!(p.phase(), Phase::Idle);
    }

    #[test]
    fn reset_after_shrinking_filter_never_points_past_the_end() {
        let p = PaginationState::new(20, 100)
            .unwrap()
            .load_more(100)
            .load_more(100);
        assert_eq!(p.revealed(), 60);
        let p = p.reset(12);
        assert_eq!(p.revealed(), 12);
        assert!(!p.has_more());
    }

    #[test]
    fn has_more_tracks_the_total_given_to_each_call() {
        let p = PaginationState::new(20, 45).unwrap().load_more(45);
        // the collection shrank without a reset; the next call still clamps
        let p = p.load_more(30);
        assert_eq!(p.revealed(), 30);
        assert!(!p.has_more());
    }

    #[test]
    fn visible_slices_the_prefix() {
        let items: Vec<u32> = (0..50).collect();
        let p = PaginationState::new(20, items.len()).unwrap();
        assert_eq!(p.visible(&items).len(), 20);
        assert_eq!(p.remaining(items.len()), 30);
        let short = [1, 2, 3];
        assert_eq!(p.visible(&short), &[1, 2, 3]);
    }
}
