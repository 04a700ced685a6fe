// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One query against one record set, no timers and no state.
//!
//! This is the whole search algorithm: trim, length gate, stable filter,
//! truncate, highlight. The controller calls it when the debounce deadline
//! passes; the CLI and benches call it directly.

use crate::config::SearchConfig;
use crate::index::RecordSet;
use crate::matcher::Matcher;
use crate::types::{ResultsView, SearchHit, SearchRecord};

/// Evaluate `query` against `records`.
///
/// - Trimmed query shorter than `min_query_length` UTF-16 code units (what a
///   page's `value.length` reports): [`ResultsView::Hidden`].
/// - Otherwise [`ResultsView::Shown`] with at most `max_results` hits, in
///   record order. Zero hits is still `Shown`.
///
/// A record matches when the query occurs, ignoring case, in its title or in
/// its content. The query never spans the two fields.
pub fn search(records: &RecordSet, query: &str, config: &SearchConfig) -> ResultsView {
    let trimmed = query.trim();
    if query_length(trimmed) < config.min_query_length {
        return ResultsView::Hidden;
    }

    let matcher = Matcher::new(trimmed);
    let hits = records
        .iter()
        .filter(|record| matcher.is_match(&record.title) || matcher.is_match(&record.content))
        .take(config.max_results)
        .map(|record| to_hit(&matcher, record))
        .collect();

    ResultsView::Shown(hits)
}

/// Length as the browser measures it, so an emoji counts as two.
fn query_length(query: &str) -> usize {
    query.encode_utf16().count()
}

fn to_hit(matcher: &Matcher, record: &SearchRecord) -> SearchHit {
    SearchHit {
        section: record.section.clone(),
        kind: record.kind.clone(),
        title: matcher.highlight(&record.title),
        content: matcher.highlight(&record.content),
    }
}
