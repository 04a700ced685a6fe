// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring matching and highlight marks.
//!
//! Matching is plain containment. No tokenizing, no fuzziness, no regex: the
//! query is literal text, so `c++` or `(` mean exactly those characters.
//!
//! # Folding
//!
//! Both sides are folded one char at a time with [`char::to_lowercase`] and
//! compared as folded sequences. A match must start and end on a char boundary
//! of the original text, which is what lets highlight ranges point back into
//! the original string with its case intact. Naively lowercasing the whole
//! haystack would break that, since lowercasing can change byte lengths
//! (`İ` becomes two chars).
//!
//! # Overlaps
//!
//! The scan is left to right and non-overlapping: after a match at `[s, e)`
//! the next candidate starts at `e`. Searching "aa" in "aaaa" marks two
//! ranges, not three.

use serde::Serialize;
use std::ops::Range;

/// A query folded once, ready to test against many records.
#[derive(Debug, Clone)]
pub struct Matcher {
    folded: Vec<char>,
}

impl Matcher {
    pub fn new(query: &str) -> Self {
        Self {
            folded: query.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// True if the query occurs anywhere in `text`, ignoring case.
    ///
    /// An empty query is contained in everything.
    pub fn is_match(&self, text: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        (0..text.len())
            .filter(|&i| text.is_char_boundary(i))
            .any(|i| self.match_at(text, i).is_some())
    }

    /// Byte ranges of every non-overlapping occurrence, left to right.
    ///
    /// An empty query yields no ranges.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        if self.folded.is_empty() {
            return ranges;
        }

        let mut pos = 0;
        while pos < text.len() {
            match self.match_at(text, pos) {
                Some(end) => {
                    ranges.push(pos..end);
                    pos = end;
                }
                None => {
                    pos += text[pos..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        ranges
    }

    /// Mark every occurrence of the query in `text`.
    pub fn highlight(&self, text: &str) -> Highlighted {
        Highlighted {
            text: text.to_string(),
            marks: self.find_all(text),
        }
    }

    /// End offset of a match starting at byte `start`, if there is one.
    ///
    /// INVARIANT: a returned end lies on a char boundary and is > `start`
    /// whenever the folded query is non-empty.
    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        let needle = &self.folded;
        let mut matched = 0;

        for (offset, c) in text[start..].char_indices() {
            if matched == needle.len() {
                return Some(start + offset);
            }
            for folded in c.to_lowercase() {
                // A char whose fold runs past the end of the query can't be half-marked
                if matched == needle.len() || needle[matched] != folded {
                    return None;
                }
                matched += 1;
            }
        }

        (matched == needle.len()).then_some(text.len())
    }
}

/// Text with marked ranges, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlighted {
    text: String,
    marks: Vec<Range<usize>>,
}

impl Highlighted {
    /// Text with nothing marked.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sorted, disjoint byte ranges into [`text`](Self::text).
    pub fn marks(&self) -> &[Range<usize>] {
        &self.marks
    }

    /// Marked substrings in order, with their original case.
    pub fn marked_text(&self) -> Vec<&str> {
        self.marks.iter().map(|r| &self.text[r.clone()]).collect()
    }

    /// Walk the text as `(slice, is_marked)` pieces.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut segments = Vec::with_capacity(self.marks.len() * 2 + 1);
        let mut cursor = 0;
        for mark in &self.marks {
            if mark.start > cursor {
                segments.push((&self.text[cursor..mark.start], false));
            }
            segments.push((&self.text[mark.clone()], true));
            cursor = mark.end;
        }
        if cursor < self.text.len() {
            segments.push((&self.text[cursor..], false));
        }
        segments
    }

    /// Wrap each mark in `open`/`close`, leaving the text otherwise untouched.
    pub fn wrap(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + self.marks.len() * 16);
        for (piece, marked) in self.segments() {
            if marked {
                out.push_str(open);
                out.push_str(piece);
                out.push_str(close);
            } else {
                out.push_str(piece);
            }
        }
        out
    }

    /// HTML-escaped text with marks wrapped in `<mark>`.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.marks.len() * 13);
        for (piece, marked) in self.segments() {
            if marked {
                out.push_str("<mark>");
                escape_html_into(piece, &mut out);
                out.push_str("</mark>");
            } else {
                escape_html_into(piece, &mut out);
            }
        }
        out
    }

    /// Keep the first `max_chars` chars. Marks crossing the cut are clipped.
    ///
    /// Returns the excerpt and whether anything was cut off.
    pub fn excerpt(&self, max_chars: usize) -> (Highlighted, bool) {
        let Some((cut, _)) = self.text.char_indices().nth(max_chars) else {
            return (self.clone(), false);
        };

        let marks = self
            .marks
            .iter()
            .filter(|r| r.start < cut)
            .map(|r| r.start..r.end.min(cut))
            .collect();

        (
            Highlighted {
                text: self.text[..cut].to_string(),
                marks,
            },
            true,
        )
    }
}

pub(crate) fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}
