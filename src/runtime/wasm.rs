// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the portfolio search box.
//!
//! The page keeps the DOM and the timer; this side keeps the state. Wire the
//! input box to `submitQuery`, arm a `setTimeout` for `nextDeadline()`, call
//! `poll` when it fires, and redraw from `drainEvents()` / `renderHtml()`.
//!
//! # Wiring
//!
//! ```js
//! const search = new FolioSearch(undefined, { maxResults: 8 });
//! search.onSelect((section) => document.getElementById(section)?.scrollIntoView({ behavior: 'smooth' }));
//!
//! let timer;
//! input.addEventListener('input', (e) => {
//!     search.submitQuery(e.target.value, performance.now());
//!     clearTimeout(timer);
//!     timer = setTimeout(() => { search.poll(performance.now()); redraw(); },
//!                        search.nextDeadline() - performance.now());
//! });
//! input.addEventListener('blur', () => { search.hide(); redraw(); });
//! document.addEventListener('keydown', (e) => {
//!     if (search.handleKey({ key: e.key, ctrlKey: e.ctrlKey, metaKey: e.metaKey, altKey: e.altKey })) {
//!         e.preventDefault();
//!         redraw();
//!     }
//! });
//! ```
//!
//! Callbacks that throw are logged and ignored; the controller's state is
//! committed before they run.

use crate::config::SearchConfig;
use crate::controller::SearchController;
use crate::defaults::default_records;
use crate::keys::{KeyCommand, KeyInput};
use crate::types::{Direction, SearchHit, SearchRecord};
use js_sys::Function;
use serde::{de::DeserializeOwned, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Search hit for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchHit {
    section: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    title: String,
    content: String,
    /// Escaped title with `<mark>` around matches.
    title_html: String,
    /// Escaped, clipped content with `<mark>` around matches.
    excerpt_html: String,
}

impl JsSearchHit {
    fn from_hit(hit: &SearchHit, excerpt_length: usize) -> Self {
        let (excerpt, clipped) = hit.content.excerpt(excerpt_length);
        let mut excerpt_html = excerpt.to_html();
        if clipped {
            excerpt_html.push_str("...");
        }
        Self {
            section: hit.section.clone(),
            kind: hit.kind.clone(),
            title: hit.title.text().to_string(),
            content: hit.content.text().to_string(),
            title_html: hit.title.to_html(),
            excerpt_html,
        }
    }
}

/// Browser-side search controller.
#[wasm_bindgen]
pub struct FolioSearch {
    controller: SearchController,
    on_search: Option<Function>,
    on_select: Option<Function>,
}

#[wasm_bindgen]
impl FolioSearch {
    /// Create a search box controller.
    ///
    /// `records` defaults to the built-in portfolio pages when undefined;
    /// `config` takes the same camelCase keys as the site config file.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue, config: JsValue) -> Result<FolioSearch, JsValue> {
        let records: Vec<SearchRecord> = optional_from_js(records)?.unwrap_or_else(default_records);
        let config: SearchConfig = optional_from_js(config)?.unwrap_or_default();
        let controller = SearchController::new(records, config).map_err(to_js_error)?;
        Ok(FolioSearch {
            controller,
            on_search: None,
            on_select: None,
        })
    }

    /// Register `(query, hits) => void`, called after each evaluated query.
    #[wasm_bindgen(js_name = "onSearch")]
    pub fn on_search(&mut self, callback: Function) {
        self.on_search = Some(callback);
    }

    /// Register `(section) => void`, called when a hit is chosen.
    #[wasm_bindgen(js_name = "onSelect")]
    pub fn on_select(&mut self, callback: Function) {
        self.on_select = Some(callback);
    }

    /// Record input at `now_ms` (e.g. `performance.now()`).
    #[wasm_bindgen(js_name = "submitQuery")]
    pub fn submit_query(&mut self, raw: &str, now_ms: f64) {
        self.controller.submit_query(raw, millis(now_ms));
    }

    /// Run the pending evaluation if due. Returns true if one ran.
    #[wasm_bindgen]
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let ran = self.controller.poll(millis(now_ms));
        if ran && self.controller.is_visible() {
            self.notify_search();
        }
        ran
    }

    /// Milliseconds timestamp at which `poll` should next be called.
    #[wasm_bindgen(js_name = "nextDeadline")]
    pub fn next_deadline(&self) -> Option<f64> {
        self.controller
            .next_deadline()
            .map(|d| d.as_secs_f64() * 1000.0)
    }

    /// `"next"` or `"previous"`. Returns the new index.
    #[wasm_bindgen(js_name = "moveSelection")]
    pub fn move_selection(&mut self, direction: &str) -> Result<Option<usize>, JsValue> {
        let direction = match direction {
            "next" => Direction::Next,
            "previous" => Direction::Previous,
            other => return Err(JsValue::from_str(&format!("Unknown direction: {}", other))),
        };
        Ok(self.controller.move_selection(direction))
    }

    #[wasm_bindgen(js_name = "selectResult")]
    pub fn select_result(&mut self, index: usize) -> Option<String> {
        let section = self.controller.select_result(index)?;
        self.notify_select(&section);
        Some(section)
    }

    #[wasm_bindgen]
    pub fn accept(&mut self) -> Option<String> {
        let section = self.controller.accept()?;
        self.notify_select(&section);
        Some(section)
    }

    /// Close the panel but keep the input. Call on blur or a click outside.
    #[wasm_bindgen]
    pub fn hide(&mut self) {
        self.controller.hide();
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.controller.clear();
    }

    /// Apply `{ key, ctrlKey, metaKey, altKey }`. Returns true if the key was handled.
    #[wasm_bindgen(js_name = "handleKey")]
    pub fn handle_key(&mut self, event: JsValue) -> Result<bool, JsValue> {
        let key: KeyInput = from_value(event).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let accepting = key.command() == Some(KeyCommand::Accept)
            && self.controller.is_visible()
            && self.controller.selected_index().is_some();
        let handled = self.controller.handle_key(&key);

        // Enter selects inside the controller; onSelect still has to hear about it
        if accepting && handled {
            if let Some(section) = self.controller.last_selected().map(str::to_string) {
                self.notify_select(&section);
            }
        }
        Ok(handled)
    }

    /// Hits currently on screen.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let excerpt_length = self.controller.config().excerpt_length;
        let hits: Vec<JsSearchHit> = self
            .controller
            .hits()
            .iter()
            .map(|h| JsSearchHit::from_hit(h, excerpt_length))
            .collect();
        to_js(&hits)
    }

    #[wasm_bindgen(js_name = "isVisible")]
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    #[wasm_bindgen(js_name = "selectedIndex")]
    pub fn selected_index(&self) -> Option<usize> {
        self.controller.selected_index()
    }

    #[wasm_bindgen(js_name = "pendingQuery")]
    pub fn pending_query(&self) -> String {
        self.controller.pending_query().to_string()
    }

    #[wasm_bindgen(js_name = "placeholder")]
    pub fn placeholder(&self) -> String {
        self.controller.config().placeholder.clone()
    }

    /// Results panel markup for the current state.
    #[wasm_bindgen(js_name = "renderHtml")]
    pub fn render_html(&self) -> String {
        self.controller.render_html()
    }

    /// Signals queued since the last call, oldest first.
    #[wasm_bindgen(js_name = "drainEvents")]
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.drain_events())
    }

    #[wasm_bindgen(js_name = "addRecords")]
    pub fn add_records(&mut self, records: JsValue) -> Result<(), JsValue> {
        let records: Vec<SearchRecord> = from_value(records).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.controller.add_records(records).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = "replaceRecords")]
    pub fn replace_records(&mut self, records: JsValue) -> Result<(), JsValue> {
        let records: Vec<SearchRecord> = from_value(records).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.controller.replace_records(records).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = "recordCount")]
    pub fn record_count(&self) -> usize {
        self.controller.records().len()
    }

    /// Cancel the pending evaluation and drop callbacks.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.controller.teardown();
        self.on_search = None;
        self.on_select = None;
    }

    fn notify_search(&self) {
        let Some(callback) = &self.on_search else {
            return;
        };
        let query = JsValue::from_str(self.controller.pending_query().trim());
        let hits = match self.results() {
            Ok(hits) => hits,
            Err(_) => return,
        };
        if let Err(e) = callback.call2(&JsValue::NULL, &query, &hits) {
            tracing::warn!(error = ?e, "onSearch callback threw");
        }
    }

    fn notify_select(&self, section: &str) {
        if let Some(callback) = &self.on_select {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(section)) {
                tracing::warn!(error = ?e, "onSelect callback threw");
            }
        }
    }
}

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn optional_from_js<T: DeserializeOwned>(value: JsValue) -> Result<Option<T>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    from_value(value)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(e: crate::FolioError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
