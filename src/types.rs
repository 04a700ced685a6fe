// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows between the controller and the page around it.
//!
//! Records go in, hits come out, and events tell the page what changed.
//! Everything serializes with camelCase keys because the consumer on the
//! other side of the WASM boundary is a plain JavaScript object.
//!
//! # Invariants
//!
//! - **SearchRecord**: `section` is unique within one [`RecordSet`](crate::RecordSet).
//!   It's the key the navigator scrolls to, so two records sharing it would
//!   make a selection ambiguous.
//!
//! - **ResultsView**: `Shown(vec![])` and `Hidden` are different states.
//!   The first renders a "No results found" placeholder, the second renders
//!   nothing at all.

use crate::matcher::Highlighted;
use serde::{Deserialize, Serialize};

/// One searchable region of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub title: String,
    pub content: String,
    /// Navigation target (the element id the page scrolls to).
    pub section: String,
    /// Display category such as "page" or "document". Not used for matching.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl SearchRecord {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            section: section.into(),
            kind: None,
        }
    }

    /// Attach a display category.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// A record that matched, with the query marked in its title and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub section: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub title: Highlighted,
    pub content: Highlighted,
}

/// What the results panel should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "hits", rename_all = "camelCase")]
pub enum ResultsView {
    /// Panel closed.
    #[default]
    Hidden,
    /// Panel open. Empty means "No results found".
    Shown(Vec<SearchHit>),
}

impl ResultsView {
    /// Hits currently on screen (empty when hidden).
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            ResultsView::Hidden => &[],
            ResultsView::Shown(hits) => hits,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ResultsView::Shown(_))
    }

    pub fn len(&self) -> usize {
        self.hits().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }
}

/// Keyboard traversal direction through the hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Next,
    Previous,
}

/// State-change signals for the rendering layer.
///
/// The controller never touches a document tree. It queues one of these for
/// every visible change and the page drains them after each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchEvent {
    /// Open the panel with `count` hits (zero means the placeholder).
    ShowResults { count: usize },
    /// Close the panel.
    HideResults,
    /// Keyboard highlight moved.
    SelectionChanged { index: Option<usize> },
    /// Scroll to this section now.
    Navigate { section: String },
    /// Put the caret in the search box (Ctrl/Cmd+K or Alt+S).
    FocusInput,
}
