// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by record management and configuration loading.
//!
//! Querying never fails. A short query or a query with no hits is a normal
//! state of the results panel, not an error. What can go wrong is the setup:
//! two records claiming the same section, a config asking for zero results,
//! or a config file that can't be read or parsed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Two records point at the same navigation target.
    #[error("duplicate section '{0}': section identifiers must be unique")]
    DuplicateSection(String),

    #[error("invalid search config: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The task owning the controller has stopped.
    #[error("search task has shut down")]
    Closed,
}

pub type Result<T> = std::result::Result<T, FolioError>;
