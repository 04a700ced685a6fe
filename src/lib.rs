// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounced in-page search and section navigation for a static portfolio.
//!
//! A handful of records (one per page section), a search box, a results panel.
//! Type, wait for the pause, see capped and highlighted hits, arrow through
//! them, press Enter, and the page scrolls to the section.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  index.rs   │────▶│  search.rs   │────▶│ matcher.rs  │
//! │ (RecordSet) │     │ (trim, gate, │     │ (fold, mark,│
//! │             │     │  filter, cap)│     │  excerpt)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   ▲
//!        ▼                   │
//! ┌─────────────────────────────────────────────────────┐
//! │                  controller.rs                       │
//! │  debounce.rs ─ submit_query / poll                   │
//! │  keys.rs     ─ handle_key, move_selection, accept    │
//! │  hooks.rs    ─ Navigator, SearchObserver (isolated)  │
//! │  SearchEvent queue ──▶ render.rs (panel markup)      │
//! └─────────────────────────────────────────────────────┘
//!        │                          │
//!        ▼                          ▼
//!  runtime::wasm (browser)    runtime::spawn (tokio task)
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{default_records, Direction, SearchConfig, SearchController, SearchEvent};
//! use std::time::Duration;
//!
//! let mut search = SearchController::new(default_records(), SearchConfig::default()).unwrap();
//!
//! search.submit_query("scr", Duration::from_millis(0));
//! search.submit_query("script", Duration::from_millis(120));
//! assert!(!search.poll(Duration::from_millis(300)));
//! assert!(search.poll(Duration::from_millis(420)));
//!
//! assert_eq!(search.hits()[0].section, "skills");
//! assert_eq!(search.hits()[0].content.marked_text(), vec!["Script"]);
//!
//! search.move_selection(Direction::Next);
//! assert_eq!(search.accept().as_deref(), Some("skills"));
//! assert!(search
//!     .drain_events()
//!     .contains(&SearchEvent::Navigate { section: "skills".into() }));
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
mod defaults;
mod error;
pub mod hooks;
mod index;
pub mod keys;
pub mod matcher;
pub mod render;
pub mod runtime;
mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{load_records, SearchConfig, SiteConfig};
pub use controller::SearchController;
pub use debounce::Debouncer;
pub use defaults::default_records;
pub use error::{FolioError, Result};
pub use hooks::{Navigator, OnSearch, SearchObserver};
pub use index::RecordSet;
pub use keys::{KeyCommand, KeyInput};
pub use matcher::{Highlighted, Matcher};
pub use render::render_results;
pub use search::search;
pub use types::{Direction, ResultsView, SearchEvent, SearchHit, SearchRecord};
