// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ordered record set a controller searches.
//!
//! Insertion order is the ranking: there's no score, so the first record that
//! matches is the first hit shown. Sections are unique. `push`, `extend` and
//! `replace` refuse a duplicate section and leave the set unchanged; `upsert`
//! overwrites the existing record in place and keeps its position.

use crate::error::{FolioError, Result};
use crate::types::SearchRecord;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<SearchRecord>,
}

impl RecordSet {
    /// Build a set, rejecting duplicate sections.
    pub fn new(records: Vec<SearchRecord>) -> Result<Self> {
        check_unique(&[], &records)?;
        Ok(Self { records })
    }

    /// Append one record. Fails if its section is taken.
    pub fn push(&mut self, record: SearchRecord) -> Result<()> {
        if self.contains(&record.section) {
            return Err(FolioError::DuplicateSection(record.section));
        }
        self.records.push(record);
        Ok(())
    }

    /// Append a batch. All or nothing: one duplicate rejects the whole batch.
    pub fn extend(&mut self, records: Vec<SearchRecord>) -> Result<()> {
        check_unique(&self.records, &records)?;
        self.records.extend(records);
        Ok(())
    }

    /// Swap the whole set for a new one.
    pub fn replace(&mut self, records: Vec<SearchRecord>) -> Result<()> {
        check_unique(&[], &records)?;
        self.records = records;
        Ok(())
    }

    /// Insert or overwrite by section. Returns the record that was replaced.
    pub fn upsert(&mut self, record: SearchRecord) -> Option<SearchRecord> {
        match self.records.iter_mut().find(|r| r.section == record.section) {
            Some(slot) => Some(std::mem::replace(slot, record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, section: &str) -> Option<&SearchRecord> {
        self.records.iter().find(|r| r.section == section)
    }

    pub fn contains(&self, section: &str) -> bool {
        self.get(section).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a SearchRecord;
    type IntoIter = std::slice::Iter<'a, SearchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn check_unique(existing: &[SearchRecord], incoming: &[SearchRecord]) -> Result<()> {
    let mut seen: HashSet<&str> = existing.iter().map(|r| r.section.as_str()).collect();
    for record in incoming {
        if !seen.insert(record.section.as_str()) {
            return Err(FolioError::DuplicateSection(record.section.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_record;

    #[test]
    fn new_rejects_duplicate_sections() {
        let err = RecordSet::new(vec![
            make_record("A", "a", "home"),
            make_record("B", "b", "home"),
        ])
        .unwrap_err();
        assert!(matches!(err, FolioError::DuplicateSection(s) if s == "home"));
    }

    #[test]
    fn extend_is_all_or_nothing() {
        let mut set = RecordSet::new(vec![make_record("Home", "welcome", "home")]).unwrap();
        let result = set.extend(vec![
            make_record("Blog", "posts", "blog"),
            make_record("Home again", "dup", "home"),
        ]);
        assert!(result.is_err());
        assert_eq!(set.len(), 1);
        assert!(!set.contains("blog"));
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut set = RecordSet::default();
        set.push(make_record("B", "", "b")).unwrap();
        set.push(make_record("A", "", "a")).unwrap();
        let sections: Vec<_> = set.iter().map(|r| r.section.as_str()).collect();
        assert_eq!(sections, vec!["b", "a"]);
        assert!(set.push(make_record("A2", "", "a")).is_err());
    }

    #[test]
    fn upsert_overwrites_in_place() {
        let mut set = RecordSet::new(vec![
            make_record("Home", "old", "home"),
            make_record("About", "me", "about"),
        ])
        .unwrap();

        let previous = set.upsert(make_record("Home", "new", "home"));
        assert_eq!(previous.map(|r| r.content), Some("old".to_string()));
        assert_eq!(set.as_slice()[0].content, "new");
        assert_eq!(set.len(), 2);

        assert!(set.upsert(make_record("Blog", "", "blog")).is_none());
        assert_eq!(set.as_slice()[2].section, "blog");
    }

    #[test]
    fn replace_validates_the_new_set() {
        let mut set = RecordSet::new(vec![make_record("Home", "", "home")]).unwrap();
        assert!(set
            .replace(vec![make_record("X", "", "x"), make_record("Y", "", "x")])
            .is_err());
        assert!(set.contains("home"));

        set.replace(vec![make_record("X", "", "x")]).unwrap();
        assert!(!set.contains("home"));
        assert_eq!(set.len(), 1);
    }
}
