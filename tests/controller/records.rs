//! Record set management on a live controller.

use crate::common::*;
use folio::{FolioError, SearchConfig, SearchController};

#[test]
fn duplicate_sections_are_rejected_at_construction() {
    let records = vec![
        make_record("About", "Who I am", "about"),
        make_record("About me", "Again", "about"),
    ];
    let err = SearchController::new(records, SearchConfig::default()).unwrap_err();
    assert!(matches!(err, FolioError::DuplicateSection(ref s) if s == "about"));
}

#[test]
fn zero_max_results_is_rejected() {
    let config = SearchConfig::default().with_max_results(0);
    let err = SearchController::new(skills_and_contact(), config).unwrap_err();
    assert!(matches!(err, FolioError::InvalidConfig(_)));
}

#[test]
fn empty_record_set_is_usable_and_finds_nothing() {
    let mut c = controller(Vec::new());
    settle(&mut c, "anything");
    assert!(c.is_visible());
    assert!(c.hits().is_empty());
}

#[test]
fn added_records_are_searchable_on_the_next_query() {
    let mut c = controller(skills_and_contact());
    c.add_records(vec![make_record("Resume", "Download my resume", "resume")])
        .unwrap();
    settle(&mut c, "resume");
    assert_eq!(sections(&c), vec!["resume"]);
}

#[test]
fn add_rejects_the_whole_batch_on_duplicate() {
    let mut c = controller(skills_and_contact());
    let err = c
        .add_records(vec![
            make_record("Blog", "Posts", "blog"),
            make_record("Skills again", "Dup", "skills"),
        ])
        .unwrap_err();

    assert!(matches!(err, FolioError::DuplicateSection(_)));
    assert_eq!(c.records().len(), 2);
    assert!(!c.records().contains("blog"));
}

#[test]
fn replace_keeps_current_hits_until_next_query() {
    let mut c = controller(skills_and_contact());
    settle(&mut c, "touch");

    c.replace_records(vec![make_record("Blog", "Posts", "blog")]).unwrap();
    assert_eq!(sections(&c), vec!["contact"]);

    settle(&mut c, "touch");
    assert!(c.hits().is_empty());
}

#[test]
fn upsert_overwrites_in_place() {
    let mut c = controller(skills_and_contact());
    let old = c.upsert_record(make_record("Skills", "Rust, TypeScript", "skills"));

    assert_eq!(old.map(|r| r.content), Some("HTML5, CSS3, JavaScript".to_string()));
    assert_eq!(c.records().len(), 2);
    assert_eq!(c.records().as_slice()[0].section, "skills");

    settle(&mut c, "typescript");
    assert_eq!(sections(&c), vec!["skills"]);
}

#[test]
fn record_changes_after_teardown_are_ignored() {
    let mut c = controller(skills_and_contact());
    c.teardown();

    c.add_records(vec![make_record("Blog", "Posts", "blog")]).unwrap();
    c.replace_records(vec![make_record("Now", "Today", "now")]).unwrap();
    assert_eq!(c.upsert_record(make_record("Skills", "Rust", "skills")), None);

    let sections: Vec<_> = c.records().iter().map(|r| r.section.as_str()).collect();
    assert_eq!(sections, vec!["skills", "contact"]);
    assert_eq!(
        c.records().get("skills").map(|r| r.content.as_str()),
        Some("HTML5, CSS3, JavaScript")
    );
}
