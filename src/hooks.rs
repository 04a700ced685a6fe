// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collaborator seams: who gets told about searches and selections.
//!
//! Both traits are called with panics caught. A hook that blows up is logged
//! and the controller carries on with its state already committed.

use crate::types::SearchHit;
use std::panic::{self, AssertUnwindSafe};

/// Scrolls the page (or whatever the host's notion of a view is) to a section.
pub trait Navigator {
    fn navigate(&mut self, section: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, section: &str) {
        self(section)
    }
}

/// Watches queries and selections, e.g. for analytics.
pub trait SearchObserver {
    /// A query was evaluated and its hits are now on screen.
    fn on_search(&mut self, _query: &str, _hits: &[SearchHit]) {}

    /// A hit was chosen.
    fn on_select(&mut self, _section: &str) {}
}

/// Adapts a closure into an observer that only cares about searches.
pub struct OnSearch<F>(pub F);

impl<F: FnMut(&str, &[SearchHit])> SearchObserver for OnSearch<F> {
    fn on_search(&mut self, query: &str, hits: &[SearchHit]) {
        (self.0)(query, hits)
    }
}

/// Run a consumer callback, swallowing (and logging) a panic.
pub(crate) fn isolate(hook: &'static str, f: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        tracing::warn!(hook, panic = %message, "search callback panicked, state kept");
    }
}
