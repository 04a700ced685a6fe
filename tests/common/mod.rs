//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{SearchConfig, SearchController, SearchRecord};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{
    make_record, ms, skills_and_contact, Observed, RecordingNavigator, RecordingObserver,
};

// ============================================================================
// CONTROLLERS
// ============================================================================

/// Controller over `records` with the default config.
pub fn controller(records: Vec<SearchRecord>) -> SearchController {
    SearchController::new(records, SearchConfig::default()).expect("valid records")
}

/// Submit `query` at t=0 and poll well past the debounce window.
pub fn settle(controller: &mut SearchController, query: &str) {
    controller.submit_query(query, Duration::ZERO);
    assert!(controller.poll(ms(60_000)), "evaluation should have run");
}

/// Sections of the hits currently shown, in order.
pub fn sections(controller: &SearchController) -> Vec<&str> {
    controller.hits().iter().map(|h| h.section.as_str()).collect()
}

/// A record set with `n` sections whose content all contains "rust".
pub fn rust_records(n: usize) -> Vec<SearchRecord> {
    (0..n)
        .map(|i| make_record(&format!("Post {i}"), "Notes on rust and wasm", &format!("post-{i}")))
        .collect()
}

// ============================================================================
// FILES
// ============================================================================

/// Write `contents` into a fresh temp dir. Keep the `TempDir` alive while using the path.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
