//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::hooks::{Navigator, SearchObserver};
use crate::types::{SearchHit, SearchRecord};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Create a record with no display category.
pub fn make_record(title: &str, content: &str, section: &str) -> SearchRecord {
    SearchRecord::new(title, content, section)
}

/// The two-record fixture used throughout the docs: Skills and Contact.
pub fn skills_and_contact() -> Vec<SearchRecord> {
    vec![
        make_record("Skills", "HTML5, CSS3, JavaScript", "skills"),
        make_record("Contact", "Get in touch", "contact"),
    ]
}

/// Milliseconds on the host's timeline.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Navigator that remembers every section it was sent to.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    /// Shared handle to the visit log (stays valid after the navigator moves).
    pub fn visited(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.visited)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, section: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(section.to_string());
        }
    }
}

/// One observed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    Search { query: String, sections: Vec<String> },
    Select { section: String },
}

/// Observer that logs searches and selections in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    log: Arc<Mutex<Vec<Observed>>>,
}

impl RecordingObserver {
    pub fn log(&self) -> Arc<Mutex<Vec<Observed>>> {
        Arc::clone(&self.log)
    }
}

impl SearchObserver for RecordingObserver {
    fn on_search(&mut self, query: &str, hits: &[SearchHit]) {
        if let Ok(mut log) = self.log.lock() {
            log.push(Observed::Search {
                query: query.to_string(),
                sections: hits.iter().map(|h| h.section.clone()).collect(),
            });
        }
    }

    fn on_select(&mut self, section: &str) {
        if let Ok(mut log) = self.log.lock() {
            log.push(Observed::Select {
                section: section.to_string(),
            });
        }
    }
}
