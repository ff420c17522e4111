//! The engine plumbing behind [`FacetSession`](crate::FacetSession), kept
//! free of JS types so it can be tested natively.

use serde::Serialize;
use worldfacets_core::prelude::*;

/// Everything the "summary" panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub summary: String,
    pub matches: usize,
    pub total: usize,
    pub revealed: usize,
    pub has_more: bool,
    pub no_results: Option<String>,
    pub suggestions: Vec<&'static str>,
}

pub struct Session {
    db: WorldDb,
    state: FilterState,
    page: PaginationState,
    data_key: Fingerprint,
    /// Indices into `db.countries()` of the current filtered set.
    memo: Memo<Vec<usize>>,
}

impl Session {
    pub fn new(db: WorldDb, batch_size: usize) -> Result<Self> {
        let page = PaginationState::new(batch_size, db.country_count())?;
        let data_key = Fingerprint::of_countries(db.countries());
        Ok(Self {
            db,
            state: FilterState::new(),
            page,
            data_key,
            memo: Memo::new(),
        })
    }

    pub fn db(&self) -> &WorldDb {
        &self.db
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn page(&self) -> PaginationState {
        self.page
    }

    /// The filtered set, recomputed only when the filter state changed.
    pub fn filtered(&mut self) -> Vec<&Country> {
        let key = self.data_key.combine(Fingerprint::of_state(&self.state));
        let Self {
            db, state, memo, ..
        } = self;
        let db: &WorldDb = db;
        let state: &FilterState = state;
        let indices = memo.get_or_compute(key, || {
            // `filter` keeps dataset order, so a single merge pass maps hits
            // back to positions.
            let mut hits = filter(db.countries(), state).into_iter().peekable();
            db.countries()
                .iter()
                .enumerate()
                .filter_map(|(i, c)| hits.next_if(|h| std::ptr::eq(*h, c)).map(|_| i))
                .collect()
        });
        indices.iter().map(|&i| &db.countries()[i]).collect()
    }

    fn reset_pages(&mut self) {
        let total = self.filtered().len();
        self.page = self.page.reset(total);
    }

    pub fn set_search(&mut self, term: &str) {
        self.state.set_search(term);
        self.reset_pages();
    }

    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let on = self.state.toggle(facet, value);
        self.reset_pages();
        on
    }

    pub fn clear_filters(&mut self) {
        self.state.clear();
        self.reset_pages();
    }

    /// Reveal the next batch. Returns whether more rows remain.
    pub fn load_more(&mut self) -> bool {
        let total = self.filtered().len();
        self.page = self.page.load_more(total);
        self.page.has_more()
    }

    pub fn visible(&mut self) -> Vec<&Country> {
        let page = self.page;
        let all = self.filtered();
        page.visible(&all).to_vec()
    }

    pub fn summary(&mut self) -> SummaryView {
        let matches = self.filtered().len();
        let continents = self.db.continents();
        SummaryView {
            summary: filter_summary(&self.state, continents),
            matches,
            total: self.db.country_count(),
            revealed: self.page.revealed(),
            has_more: self.page.has_more(),
            no_results: (matches == 0).then(|| no_results_message(&self.state, continents)),
            suggestions: if matches == 0 {
                filter_suggestions(&self.state)
            } else {
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(WorldDb::load().unwrap(), 20).unwrap()
    }

    #[test]
    fn starts_with_first_batch_of_everything() {
        let mut s = session();
        assert_eq!(s.visible().len(), 20);
        assert!(s.page().has_more());
    }

    #[test]
    fn toggling_resets_pagination() {
        let mut s = session();
        s.load_more();
        assert_eq!(s.page().revealed(), 40);
        assert!(s.toggle(Facet::Continent, "EU"));
        assert_eq!(s.page().revealed(), 19);
        assert!(!s.page().has_more());
        assert!(s.visible().iter().all(|c| c.continent_code() == "EU"));
    }

    #[test]
    fn filtered_set_keeps_dataset_order() {
        let mut s = session();
        s.toggle(Facet::Language, "French");
        let codes: Vec<&str> = s.filtered().iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["BE", "CA", "CH", "FR", "LU"]);
    }

    #[test]
    fn empty_result_explains_itself() {
        let mut s = session();
        s.set_search("zzz");
        let view = s.summary();
        assert_eq!(view.matches, 0);
        assert!(view.no_results.is_some());
        assert_eq!(view.suggestions.len(), 1);

        s.clear_filters();
        assert_eq!(s.summary().matches, s.db().country_count());
    }
}
