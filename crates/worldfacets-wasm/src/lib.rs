//! worldfacets-wasm: WebAssembly bindings for worldfacets-core
//!
//! Exposes a stateful [`FacetSession`] to JavaScript. The session owns the
//! embedded country dataset, the current filter selection and the
//! pagination state; every mutator resets pagination, and every query
//! returns a plain JS object built with `serde-wasm-bindgen`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { FacetSession } from 'worldfacets-wasm';
//!
//! async function main() {
//!   await init();
//!   const session = new FacetSession();
//!   session.toggle_continent('EU');
//!   session.toggle_language('French');
//!   console.log(session.visible_countries());
//!   console.log(session.facet_counts());
//!   if (session.summary().has_more) session.load_more();
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The dataset is the JSON bundled with `worldfacets-core`, compiled into
//!   the module and decoded once on first use.
//! - Engine log records (`log` facade) are forwarded to the browser console.
use serde::Serialize;
use wasm_bindgen::prelude::*;

use worldfacets_core::aggregate::{
    continent_chart_data, continent_stats, countries_with_many_languages, currency_diversity,
    language_distribution, ContinentStat,
};
use worldfacets_core::filter::facet_counts;
use worldfacets_core::intersect::with_multiple_selected_languages;
use worldfacets_core::{Facet, WorldDb, DEFAULT_BATCH_SIZE};

mod session;

pub use session::{Session, SummaryView};

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, LevelFilter, Log, Metadata, Record};

    struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}", record.target(), record.args()).into();
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::init();
    web_sys::console::log_1(&"Initializing worldfacets WASM module...".into());
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_err)
}

/// A browsing session over the embedded dataset.
#[wasm_bindgen]
pub struct FacetSession {
    inner: Session,
}

#[wasm_bindgen]
impl FacetSession {
    /// New session with the default batch size of 20.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<FacetSession, JsValue> {
        Self::with_batch_size(DEFAULT_BATCH_SIZE)
    }

    pub fn with_batch_size(batch_size: usize) -> Result<FacetSession, JsValue> {
        let db = WorldDb::load().map_err(js_err)?;
        let inner = Session::new(db, batch_size).map_err(js_err)?;
        web_sys::console::log_1(
            &format!("✓ Loaded {} countries", inner.db().country_count()).into(),
        );
        Ok(FacetSession { inner })
    }

    /* ----------------------------------------------------------------------
       Mutators (each resets pagination)
    ---------------------------------------------------------------------- */

    pub fn set_search(&mut self, term: &str) {
        self.inner.set_search(term);
    }

    /// Returns whether the continent is selected afterwards.
    pub fn toggle_continent(&mut self, code: &str) -> bool {
        self.inner.toggle(Facet::Continent, code)
    }

    pub fn toggle_language(&mut self, name: &str) -> bool {
        self.inner.toggle(Facet::Language, name)
    }

    pub fn toggle_currency(&mut self, code: &str) -> bool {
        self.inner.toggle(Facet::Currency, code)
    }

    pub fn clear_filters(&mut self) {
        self.inner.clear_filters();
    }

    /// Reveal the next batch; returns whether more remain.
    pub fn load_more(&mut self) -> bool {
        self.inner.load_more()
    }

    /* ----------------------------------------------------------------------
       Queries
    ---------------------------------------------------------------------- */

    pub fn match_count(&mut self) -> usize {
        self.inner.filtered().len()
    }

    pub fn visible_countries(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.visible())
    }

    pub fn facet_counts(&self) -> Result<JsValue, JsValue> {
        to_js(&facet_counts(self.inner.db().countries(), self.inner.state()))
    }

    /// Continent stats over the filtered set, each with its chart colour.
    pub fn continent_stats(&mut self) -> Result<JsValue, JsValue> {
        #[derive(Serialize)]
        struct Row<'a> {
            #[serde(flatten)]
            stat: &'a ContinentStat,
            color: &'static str,
        }

        let continents = self.inner.db().continents().to_vec();
        let stats = continent_stats(&self.inner.filtered(), &continents);
        let bars = continent_chart_data(&stats);
        let rows: Vec<Row<'_>> = stats
            .iter()
            .zip(&bars)
            .map(|(stat, bar)| Row {
                stat,
                color: bar.color,
            })
            .collect();
        to_js(&rows)
    }

    pub fn language_distribution(&mut self) -> Result<JsValue, JsValue> {
        to_js(&language_distribution(&self.inner.filtered()))
    }

    pub fn currency_diversity(&mut self) -> Result<JsValue, JsValue> {
        to_js(&currency_diversity(&self.inner.filtered()))
    }

    pub fn multilingual(&mut self) -> Result<JsValue, JsValue> {
        to_js(&countries_with_many_languages(&self.inner.filtered()))
    }

    /// Countries speaking two or more of the selected languages.
    pub fn overlap(&mut self) -> Result<JsValue, JsValue> {
        let selected = self.inner.state().selected_languages().to_vec();
        let filtered = self.inner.filtered();
        to_js(&with_multiple_selected_languages(&filtered, &selected))
    }

    pub fn summary(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.summary())
    }

    /// Selected language names, in selection order.
    pub fn selected_languages(&self) -> js_sys::Array {
        self.inner
            .state()
            .selected_languages()
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    /// The current selection, e.g. for persisting in the URL.
    pub fn filter_state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    pub fn dataset_stats(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.db().stats())
    }
}
