// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the folio CLI.
//!
//! The same results panel the page draws, but in a box on stdout: titles and
//! excerpts with the matched text picked out in bold yellow, a type badge,
//! and the section id each hit would navigate to.
//!
//! Colors follow the terminal's background. `FOLIO_THEME` ("dark"/"light")
//! wins, then `COLORFGBG`, then dark. `NO_COLOR` and non-TTY stdout turn
//! styling off entirely so output pipes cleanly.

use folio::{Highlighted, RecordSet, ResultsView, SearchHit};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark / One Light pairs: (dark, light)
mod palette {
    pub const GREEN: [(u8, u8, u8); 2] = [(152, 195, 121), (80, 161, 79)];
    pub const YELLOW: [(u8, u8, u8); 2] = [(229, 192, 123), (193, 132, 1)];
    pub const BLUE: [(u8, u8, u8); 2] = [(97, 175, 239), (64, 120, 242)];
    pub const CYAN: [(u8, u8, u8); 2] = [(86, 182, 194), (1, 132, 188)];
    pub const GRAY: [(u8, u8, u8); 2] = [(92, 99, 112), (160, 161, 167)];
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let pair = palette::$name;
            rgb(match theme() {
                Theme::Dark => pair[0],
                Theme::Light => pair[1],
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{border}│{reset}{content}{}{border}│{reset}", " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{border}┌{reset}{label_part}{border}{}┐{reset}", "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!("{border}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Highlighted text for the terminal: marks in bold yellow, or `[..]` without color.
pub fn highlighted(text: &Highlighted) -> String {
    if use_colors() {
        text.wrap(&format!("{}{}", BOLD, YELLOW()), RESET)
    } else {
        text.wrap("[", "]")
    }
}

/// `[page]`-style badge for a record's display category.
pub fn kind_badge(kind: Option<&str>) -> String {
    match kind {
        Some(kind) => themed(BLUE, &[], &format!("[{}]", kind)),
        None => String::new(),
    }
}

/// Cut `text` to `max` visible chars, adding "..." when shortened.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn hit_lines(index: usize, hit: &SearchHit, excerpt_length: usize, selected: bool) -> Vec<String> {
    let marker = if selected {
        themed(GREEN, &[BOLD], "▸")
    } else {
        " ".to_string()
    };
    let (excerpt, clipped) = hit.content.excerpt(excerpt_length.min(BOX_WIDTH - 8));
    let mut content = highlighted(&excerpt);
    if clipped {
        content.push_str("...");
    }

    vec![
        format!(
            " {} {:>2}. {} {}",
            marker,
            index + 1,
            highlighted(&hit.title),
            kind_badge(hit.kind.as_deref())
        ),
        format!("       {}", content),
        format!("       {}", themed(GRAY, &[DIM], &format!("#{}", hit.section))),
    ]
}

/// Draw the results panel for one query.
pub fn print_results(query: &str, view: &ResultsView, selected: Option<usize>, excerpt_length: usize) {
    section_top(&format!("SEARCH \"{}\"", clip(query, 40)));
    match view {
        ResultsView::Hidden => {
            row(&themed(GRAY, &[], " Query too short, results hidden"));
        }
        ResultsView::Shown(hits) if hits.is_empty() => {
            row(&themed(GRAY, &[], &format!(" {}", folio::render::NO_RESULTS_TEXT)));
        }
        ResultsView::Shown(hits) => {
            for (i, hit) in hits.iter().enumerate() {
                for line in hit_lines(i, hit, excerpt_length, selected == Some(i)) {
                    row(&line);
                }
            }
        }
    }
    section_bot();
}

/// Draw the record set as a table.
pub fn print_records(records: &RecordSet) {
    section_top(&format!("RECORDS ({})", records.len()));
    for record in records {
        let head = format!(
            " {} {} {}",
            themed(CYAN, &[BOLD], &format!("{:<12}", clip(&record.section, 12))),
            clip(&record.title, 24),
            kind_badge(record.kind.as_deref())
        );
        row(&head);
        row(&format!("   {}", themed(GRAY, &[], &clip(&record.content, BOX_WIDTH - 4))));
    }
    section_bot();
}
