//! Custom cargo commands for the folio crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, every feature combination
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask wasm      - Build the browser module
//!   cargo xtask fuzz <t>  - Run one fuzz target for a minute
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const LICENSE_HEADER: &str = "// SPDX-License-Identifier: Apache-2.0";

/// Feature sets the crate must build and pass tests under.
const FEATURE_SETS: &[&[&str]] = &[&[], &["--features", "async"], &["--all-features"]];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("fuzz") => fuzz(args.next().as_deref().unwrap_or("search_queries"))?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (headers + tests + clippy + wasm)
  test      Run all Rust tests under every feature set
  check     Quick check (cargo test + clippy)
  wasm      Build the wasm32 module with the `wasm` feature
  fuzz      Run a fuzz target for 60s (default: search_queries)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("folio Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking license headers...");
    check_license_headers()?;
    println!("✓ Every source file carries the header\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ No clippy warnings\n");

    println!("[4/4] Building wasm module...");
    wasm()?;
    println!("✓ wasm32 build succeeded\n");

    println!("==========================================");
    println!("All verification checks passed!");
    println!("==========================================");
    Ok(())
}

/// Run tests
fn test() -> Result<()> {
    for features in FEATURE_SETS {
        let mut args = vec!["test", "--quiet"];
        args.extend_from_slice(features);
        run_cargo(&args)?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build the browser module
fn wasm() -> Result<()> {
    run_cargo(&[
        "build",
        "--release",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "wasm",
    ])
}

/// Run one cargo-fuzz target with a time limit
fn fuzz(target: &str) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&fuzz_dir)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_license_headers() -> Result<()> {
    let root = project_root()?;
    let mut missing = Vec::new();
    collect_missing_headers(&root.join("src"), &mut missing)?;

    if !missing.is_empty() {
        for path in &missing {
            eprintln!("  missing header: {}", path.display());
        }
        bail!("{} source files lack the license header", missing.len());
    }
    Ok(())
}

fn collect_missing_headers(dir: &Path, missing: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_missing_headers(&path, missing)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if !content.lines().take(3).any(|line| line == LICENSE_HEADER) {
                missing.push(path);
            }
        }
    }
    Ok(())
}
