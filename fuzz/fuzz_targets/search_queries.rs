// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary strings at the built-in records and checks the result
//! stays within the configured cap and only contains matching records.

#![no_main]

use libfuzzer_sys::fuzz_target;
use folio::{default_records, search, Matcher, RecordSet, ResultsView, SearchConfig};

fuzz_target!(|query: &str| {
    static RECORDS: std::sync::OnceLock<RecordSet> = std::sync::OnceLock::new();
    let records = RECORDS.get_or_init(|| {
        RecordSet::new(default_records()).expect("built-in records are unique")
    });
    let config = SearchConfig::default();

    let trimmed = query.trim();
    match search(records, query, &config) {
        ResultsView::Hidden => {
            assert!(trimmed.encode_utf16().count() < config.min_query_length);
        }
        ResultsView::Shown(hits) => {
            assert!(hits.len() <= config.max_results);
            let matcher = Matcher::new(trimmed);
            for hit in &hits {
                let record = records.get(&hit.section).expect("hit from a known record");
                assert!(matcher.is_match(&record.title) || matcher.is_match(&record.content));
            }
        }
    }
});
