// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box's brain: keystrokes in, hits and navigation out.
//!
//! A [`SearchController`] owns the record set and everything the results
//! panel needs: the latest input, the hits on screen, and the keyboard
//! highlight. It never touches a page. Every visible change is queued as a
//! [`SearchEvent`] and the host drains the queue after each call, so one
//! rendering layer decides how things are drawn.
//!
//! # Timeline
//!
//! ```text
//! submit_query("sc", t=0)    ──┐
//! submit_query("scr", t=120) ──┼── each call pushes the deadline out
//! submit_query("script", t=250)┘
//!                                   poll(t=550) ── evaluate("script")
//!                                                   ├─ ShowResults { count }
//!                                                   └─ observer.on_search(..)
//! move_selection(Next)        ── SelectionChanged { index: Some(0) }
//! accept()                    ── HideResults, Navigate { section }
//! ```
//!
//! Time comes from the host as a `Duration` since whatever origin it likes.
//! Nothing here reads a clock, which keeps the controller usable from a
//! browser timer, a tokio task, or a test that just counts milliseconds.
//!
//! # Invariants
//!
//! - `selected` is `None` or a valid index into the hits on screen.
//! - Results are committed before any hook runs, and hooks run isolated.
//! - After [`teardown`](SearchController::teardown) every operation is inert.

use crate::config::{SearchConfig, SiteConfig};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::hooks::{isolate, Navigator, SearchObserver};
use crate::index::RecordSet;
use crate::keys::{KeyCommand, KeyInput};
use crate::render::render_results;
use crate::search::search;
use crate::types::{Direction, ResultsView, SearchEvent, SearchHit, SearchRecord};
use std::fmt;
use std::time::Duration;

pub struct SearchController {
    config: SearchConfig,
    records: RecordSet,
    pending_query: String,
    results: ResultsView,
    selected: Option<usize>,
    last_selected: Option<String>,
    debounce: Debouncer<String>,
    events: Vec<SearchEvent>,
    observer: Option<Box<dyn SearchObserver + Send>>,
    navigator: Option<Box<dyn Navigator + Send>>,
    evaluations: u64,
    torn_down: bool,
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("config", &self.config)
            .field("records", &self.records.len())
            .field("pending_query", &self.pending_query)
            .field("results", &self.results)
            .field("selected", &self.selected)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl SearchController {
    /// Create a controller over `records`.
    ///
    /// Fails on an invalid config or duplicate sections. An empty record set
    /// is allowed (every qualifying query shows the placeholder) but logged.
    pub fn new(records: Vec<SearchRecord>, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let records = RecordSet::new(records)?;
        if records.is_empty() {
            tracing::warn!("search has no records; every query will show \"No results found\"");
        }
        tracing::info!(
            records = records.len(),
            min_query_length = config.min_query_length,
            max_results = config.max_results,
            debounce_ms = config.debounce_delay_ms,
            "search initialized"
        );

        Ok(Self {
            debounce: Debouncer::new(config.debounce_delay()),
            config,
            records,
            pending_query: String::new(),
            results: ResultsView::Hidden,
            selected: None,
            last_selected: None,
            events: Vec::new(),
            observer: None,
            navigator: None,
            evaluations: 0,
            torn_down: false,
        })
    }

    /// Controller over the site's records with the site's settings.
    pub fn from_site_config(site: &SiteConfig) -> Result<Self> {
        Self::new(site.records(), site.search.clone())
    }

    pub fn with_observer(mut self, observer: impl SearchObserver + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn with_navigator(mut self, navigator: impl Navigator + Send + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Record new input and (re)start the debounce window.
    ///
    /// Nothing else happens until [`poll`](Self::poll) sees the deadline pass.
    pub fn submit_query(&mut self, raw: &str, now: Duration) {
        if self.torn_down {
            return;
        }
        self.pending_query = raw.to_string();
        let deadline = self.debounce.schedule(raw.to_string(), now);
        tracing::trace!(query = raw, deadline_ms = deadline.as_millis() as u64, "query scheduled");
    }

    /// Run the scheduled evaluation if its deadline has passed.
    ///
    /// Returns true if an evaluation ran.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.torn_down {
            return false;
        }
        match self.debounce.poll(now) {
            Some(query) => {
                self.evaluate(&query);
                true
            }
            None => false,
        }
    }

    /// When the host should call [`poll`](Self::poll) next, if anything is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debounce.deadline()
    }

    fn evaluate(&mut self, query: &str) {
        self.evaluations += 1;
        self.selected = None;

        let trimmed = query.trim();
        match search(&self.records, trimmed, &self.config) {
            ResultsView::Hidden => {
                tracing::debug!(query = trimmed, "query below minimum length, hiding results");
                self.results = ResultsView::Hidden;
                self.emit(SearchEvent::HideResults);
                return;
            }
            shown => {
                let count = shown.len();
                tracing::debug!(query = trimmed, count, "search evaluated");
                self.results = shown;
                self.emit(SearchEvent::ShowResults { count });
            }
        }

        if let Some(observer) = self.observer.as_mut() {
            let hits = self.results.hits();
            isolate("on_search", || observer.on_search(trimmed, hits));
        }
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Choose the hit at `index` and raise a navigation intent for its section.
    ///
    /// Out-of-range indices (including any index while hidden) are ignored.
    pub fn select_result(&mut self, index: usize) -> Option<String> {
        if self.torn_down {
            return None;
        }
        let section = self.results.hits().get(index)?.section.clone();
        tracing::debug!(section = %section, index, "navigating to section");

        self.last_selected = Some(section.clone());
        self.clear();
        self.emit(SearchEvent::Navigate {
            section: section.clone(),
        });

        if let Some(navigator) = self.navigator.as_mut() {
            isolate("navigate", || navigator.navigate(&section));
        }
        if let Some(observer) = self.observer.as_mut() {
            isolate("on_select", || observer.on_select(&section));
        }
        Some(section)
    }

    /// Move the keyboard highlight, clamped at both ends.
    ///
    /// Returns the new index, or `None` when there are no hits to move through.
    pub fn move_selection(&mut self, direction: Direction) -> Option<usize> {
        let len = self.results.len();
        if self.torn_down || len == 0 {
            return None;
        }

        let next = match (direction, self.selected) {
            (Direction::Next, None) => 0,
            (Direction::Next, Some(i)) => (i + 1).min(len - 1),
            (Direction::Previous, None) => len - 1,
            (Direction::Previous, Some(i)) => i.saturating_sub(1),
        };

        if self.selected != Some(next) {
            self.selected = Some(next);
            self.emit(SearchEvent::SelectionChanged { index: Some(next) });
        }
        Some(next)
    }

    /// Select the highlighted hit, if there is one.
    pub fn accept(&mut self) -> Option<String> {
        let index = self.selected?;
        self.select_result(index)
    }

    /// Close the panel but keep the typed input and any pending evaluation.
    ///
    /// This is what a blur or a click outside the box should call; the next
    /// settled query opens the panel again.
    pub fn hide(&mut self) {
        if self.torn_down {
            return;
        }
        self.results = ResultsView::Hidden;
        self.selected = None;
        self.emit(SearchEvent::HideResults);
    }

    /// Drop the input, the hits and the highlight, and close the panel.
    pub fn clear(&mut self) {
        if self.torn_down {
            return;
        }
        self.pending_query.clear();
        self.debounce.cancel();
        self.hide();
    }

    /// Apply a key press. Returns true if the key did something.
    ///
    /// Ctrl/Cmd+K and Alt+S always ask for focus. Escape, arrows and Enter only act
    /// while the panel is open.
    pub fn handle_key(&mut self, key: &KeyInput) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(command) = key.command() else {
            return false;
        };

        match command {
            KeyCommand::FocusSearch => {
                self.emit(SearchEvent::FocusInput);
                true
            }
            _ if !self.results.is_visible() => false,
            KeyCommand::Cancel => {
                self.clear();
                true
            }
            KeyCommand::Move(direction) => self.move_selection(direction).is_some(),
            KeyCommand::Accept => self.accept().is_some(),
        }
    }

    // =========================================================================
    // RECORDS
    // =========================================================================

    /// Append records. Rejects the whole batch on a duplicate section.
    pub fn add_records(&mut self, records: Vec<SearchRecord>) -> Result<()> {
        if self.torn_down {
            return Ok(());
        }
        let added = records.len();
        self.records.extend(records)?;
        tracing::debug!(added, total = self.records.len(), "records added");
        Ok(())
    }

    /// Swap the record set. Hits already on screen stay until the next query.
    pub fn replace_records(&mut self, records: Vec<SearchRecord>) -> Result<()> {
        if self.torn_down {
            return Ok(());
        }
        self.records.replace(records)?;
        if self.records.is_empty() {
            tracing::warn!("search records replaced with an empty set");
        }
        Ok(())
    }

    /// Insert or overwrite one record by section.
    pub fn upsert_record(&mut self, record: SearchRecord) -> Option<SearchRecord> {
        if self.torn_down {
            return None;
        }
        self.records.upsert(record)
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    // =========================================================================
    // STATE
    // =========================================================================

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn pending_query(&self) -> &str {
        &self.pending_query
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn hits(&self) -> &[SearchHit] {
        self.results.hits()
    }

    pub fn is_visible(&self) -> bool {
        self.results.is_visible()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.selected.and_then(|i| self.results.hits().get(i))
    }

    /// Section of the most recent selection.
    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    /// How many times the debounce timer has fired an evaluation.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    /// Take every signal queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SearchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Results panel markup for the current state.
    pub fn render_html(&self) -> String {
        render_results(&self.results, self.selected, &self.config)
    }

    /// Cancel any pending evaluation and make the controller inert.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.debounce.cancel();
        self.torn_down = true;
        tracing::info!("search destroyed");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn emit(&mut self, event: SearchEvent) {
        self.events.push(event);
    }
}
