// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use folio::{load_records, Direction, RecordSet, SearchController, SearchRecord, SiteConfig};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--html` and `--json` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let site = match &cli.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading site config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let records = match &cli.records {
        Some(path) => read_records(path)?,
        None => site.records(),
    };

    match cli.command {
        Commands::Search {
            query,
            limit,
            min_length,
            select,
            html,
            json,
        } => {
            let mut config = site.search.clone();
            if let Some(limit) = limit {
                config = config.with_max_results(limit);
            }
            if let Some(min) = min_length {
                config = config.with_min_query_length(min);
            }
            run_search(records, config, &query, select, html, json)
        }
        Commands::Records { json } => run_records(records, json),
    }
}

fn read_records(path: &Path) -> Result<Vec<SearchRecord>> {
    load_records(path).with_context(|| format!("loading records {}", path.display()))
}

/// Drive one query through the controller the way the page would: a keystroke
/// at t=0, then a poll once the debounce window has passed.
fn run_search(
    records: Vec<SearchRecord>,
    config: folio::SearchConfig,
    query: &str,
    select: usize,
    html: bool,
    json: bool,
) -> Result<()> {
    let excerpt_length = config.excerpt_length;
    let mut controller = SearchController::new(records, config).context("building search")?;

    controller.submit_query(query, Duration::ZERO);
    if let Some(deadline) = controller.next_deadline() {
        controller.poll(deadline);
    }
    for _ in 0..select {
        controller.move_selection(Direction::Next);
    }
    tracing::debug!(events = ?controller.drain_events(), "search finished");

    if html {
        println!("{}", controller.render_html());
    } else if json {
        let out = serde_json::to_string_pretty(controller.results()).context("encoding results")?;
        println!("{}", out);
    } else {
        display::print_results(
            query,
            controller.results(),
            controller.selected_index(),
            excerpt_length,
        );
    }
    Ok(())
}

fn run_records(records: Vec<SearchRecord>, json: bool) -> Result<()> {
    let set = RecordSet::new(records).context("validating records")?;
    if json {
        let out = serde_json::to_string_pretty(set.as_slice()).context("encoding records")?;
        println!("{}", out);
    } else {
        display::print_records(&set);
    }
    Ok(())
}
