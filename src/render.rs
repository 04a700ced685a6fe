// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Results panel markup.
//!
//! The page's stylesheet already knows these class names, so the output can be
//! dropped straight into the results container. All record text is escaped;
//! the only tags that come out are the ones written here and `<mark>`.

use crate::config::SearchConfig;
use crate::matcher::escape_html;
use crate::types::{ResultsView, SearchHit};

pub const NO_RESULTS_TEXT: &str = "No results found";

const ELLIPSIS: &str = "...";

/// Markup for the whole panel. Hidden renders as an empty string.
pub fn render_results(view: &ResultsView, selected: Option<usize>, config: &SearchConfig) -> String {
    match view {
        ResultsView::Hidden => String::new(),
        ResultsView::Shown(hits) if hits.is_empty() => format!(
            "<div class=\"search-result-item search-result-item--no-results\">{}</div>",
            NO_RESULTS_TEXT
        ),
        ResultsView::Shown(hits) => hits
            .iter()
            .enumerate()
            .map(|(index, hit)| render_hit(index, hit, selected == Some(index), config))
            .collect(),
    }
}

/// One `search-result-item` block.
pub fn render_hit(index: usize, hit: &SearchHit, selected: bool, config: &SearchConfig) -> String {
    let (excerpt, clipped) = hit.content.excerpt(config.excerpt_length);
    let mut content = excerpt.to_html();
    if clipped {
        content.push_str(ELLIPSIS);
    }

    let class = if selected {
        "search-result-item search-result-item--selected"
    } else {
        "search-result-item"
    };

    let kind = hit
        .kind
        .as_deref()
        .map(|k| format!("<div class=\"search-result-type\">{}</div>", escape_html(k)))
        .unwrap_or_default();

    format!(
        "<div class=\"{class}\" data-index=\"{index}\" data-section=\"{section}\">\
         <div class=\"search-result-title\">{title}</div>\
         <div class=\"search-result-content\">{content}</div>\
         {kind}</div>",
        section = escape_html(&hit.section),
        title = hit.title.to_html(),
    )
}
