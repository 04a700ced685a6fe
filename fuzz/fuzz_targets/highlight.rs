// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for case-folded highlighting.
//!
//! Case folding can change a char's length (İ, ß, ligatures), so marks must
//! still land on char boundaries of the original text, never overlap, and
//! survive excerpting and HTML escaping.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use folio::Matcher;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
    excerpt: u8,
}

fuzz_target!(|input: HighlightInput| {
    let marked = Matcher::new(&input.query).highlight(&input.text);

    let mut last_end = 0;
    for mark in marked.marks() {
        assert!(mark.start >= last_end, "marks overlap");
        assert!(mark.start < mark.end, "empty mark");
        assert!(input.text.is_char_boundary(mark.start));
        assert!(input.text.is_char_boundary(mark.end));
        last_end = mark.end;
    }

    let (excerpt, _) = marked.excerpt(input.excerpt as usize);
    for mark in excerpt.marks() {
        assert!(excerpt.text().is_char_boundary(mark.end));
    }

    let html = excerpt.to_html();
    assert!(html.matches("<mark>").count() <= excerpt.marks().len());
});
