// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Two subcommands: `search` runs one query through the same debounced
//! controller the page uses and prints the panel, and `records` lists and
//! validates a record set before it ships. Both read an optional site config;
//! flags given on the command line override the file.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Debounced section search for a static portfolio",
    version
)]
pub struct Cli {
    /// Site config file (JSON with `search` and `customSearchData`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Record set file (JSON array), replaces the built-in records
    #[arg(short, long, global = true)]
    pub records: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query and print the results panel
    Search {
        /// Search query, as typed into the box
        query: String,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Minimum query length (UTF-16 code units, after trimming)
        #[arg(long)]
        min_length: Option<usize>,

        /// Press ArrowDown this many times before printing
        #[arg(long, default_value = "0")]
        select: usize,

        /// Print the panel markup instead of the terminal view
        #[arg(long)]
        html: bool,

        /// Print hits as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
    },

    /// List the record set and check it for duplicate sections
    Records {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}
