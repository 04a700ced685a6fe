// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration and the site config file that carries it.
//!
//! Keys are camelCase so the same JSON works for the CLI and for the object a
//! page hands to the WASM constructor:
//!
//! ```json
//! {
//!   "search": { "minQueryLength": 2, "maxResults": 8, "debounceDelay": 300 },
//!   "customSearchData": [
//!     { "title": "Resume", "content": "Download my resume", "section": "resume", "type": "document" }
//!   ]
//! }
//! ```
//!
//! Every field has a default, so `{}` is a valid config.

use crate::defaults::default_records;
use crate::error::{FolioError, Result};
use crate::types::SearchRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Minimum trimmed query length, in UTF-16 code units, before anything is searched.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

/// Result cap for a bare [`SearchConfig`].
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Result cap the bundled site config uses.
pub const SITE_MAX_RESULTS: usize = 8;

/// Quiet period after the last keystroke, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Content excerpt length shown under each hit, in chars.
pub const DEFAULT_EXCERPT_LENGTH: usize = 100;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub min_query_length: usize,
    /// Must be at least 1.
    pub max_results: usize,
    #[serde(rename = "debounceDelay")]
    pub debounce_delay_ms: u64,
    pub excerpt_length: usize,
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
            debounce_delay_ms: DEFAULT_DEBOUNCE_MS,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn with_min_query_length(mut self, len: usize) -> Self {
        self.min_query_length = len;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(FolioError::InvalidConfig(
                "maxResults must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything a site configures for search: the knobs plus extra records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub search: SearchConfig,
    /// Records appended after the built-in portfolio records.
    pub custom_search_data: Vec<SearchRecord>,
    /// Drop the built-in records and use only `customSearchData`.
    pub replace_defaults: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                max_results: SITE_MAX_RESULTS,
                ..SearchConfig::default()
            },
            custom_search_data: Vec::new(),
            replace_defaults: false,
        }
    }
}

impl SiteConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig =
            serde_json::from_str(&raw).map_err(|source| FolioError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.search.validate()?;
        tracing::debug!(
            path = %path.display(),
            custom_records = config.custom_search_data.len(),
            "loaded site config"
        );
        Ok(config)
    }

    /// Built-in records followed by the custom ones (or only the custom ones).
    pub fn records(&self) -> Vec<SearchRecord> {
        if self.replace_defaults {
            return self.custom_search_data.clone();
        }
        let mut records = default_records();
        records.extend(self.custom_search_data.iter().cloned());
        records
    }
}

/// Read a JSON array of records from disk.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SearchRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| FolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FolioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
