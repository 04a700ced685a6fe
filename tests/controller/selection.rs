//! Keyboard highlight movement and selection.

use crate::common::*;
use folio::{Direction, SearchConfig, SearchController, SearchEvent};

#[test]
fn next_walks_down_and_clamps_at_the_end() {
    let mut c = controller(rust_records(3));
    settle(&mut c, "rust");

    assert_eq!(c.move_selection(Direction::Next), Some(0));
    assert_eq!(c.move_selection(Direction::Next), Some(1));
    assert_eq!(c.move_selection(Direction::Next), Some(2));
    assert_eq!(c.move_selection(Direction::Next), Some(2));
    assert_eq!(c.selected_index(), Some(2));
}

#[test]
fn previous_from_nothing_starts_at_the_bottom_and_clamps_at_zero() {
    let mut c = controller(rust_records(3));
    settle(&mut c, "rust");

    assert_eq!(c.move_selection(Direction::Previous), Some(2));
    assert_eq!(c.move_selection(Direction::Previous), Some(1));
    assert_eq!(c.move_selection(Direction::Previous), Some(0));
    assert_eq!(c.move_selection(Direction::Previous), Some(0));
}

#[test]
fn selection_changes_are_signalled_once() {
    let mut c = controller(rust_records(2));
    settle(&mut c, "rust");
    c.drain_events();

    c.move_selection(Direction::Next);
    c.move_selection(Direction::Next);
    c.move_selection(Direction::Next);

    assert_eq!(
        c.drain_events(),
        vec![
            SearchEvent::SelectionChanged { index: Some(0) },
            SearchEvent::SelectionChanged { index: Some(1) },
        ]
    );
}

#[test]
fn moving_with_no_hits_does_nothing() {
    let mut c = controller(skills_and_contact());
    assert_eq!(c.move_selection(Direction::Next), None);

    settle(&mut c, "python");
    assert!(c.is_visible());
    assert_eq!(c.move_selection(Direction::Next), None);
    assert_eq!(c.selected_index(), None);
}

#[test]
fn new_results_reset_the_highlight() {
    let mut c = controller(rust_records(3));
    settle(&mut c, "rust");
    c.move_selection(Direction::Next);

    settle(&mut c, "wasm");
    assert_eq!(c.selected_index(), None);
}

#[test]
fn select_result_clears_and_navigates() {
    let navigator = RecordingNavigator::default();
    let visited = navigator.visited();
    let mut c = controller(skills_and_contact()).with_navigator(navigator);
    settle(&mut c, "touch");
    c.drain_events();

    assert_eq!(c.select_result(0).as_deref(), Some("contact"));

    assert!(c.hits().is_empty());
    assert!(!c.is_visible());
    assert_eq!(c.pending_query(), "");
    assert_eq!(c.last_selected(), Some("contact"));
    assert_eq!(*visited.lock().unwrap(), vec!["contact".to_string()]);
    assert_eq!(
        c.drain_events(),
        vec![
            SearchEvent::HideResults,
            SearchEvent::Navigate {
                section: "contact".to_string()
            },
        ]
    );
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut c = controller(skills_and_contact());
    assert_eq!(c.select_result(0), None);

    settle(&mut c, "touch");
    assert_eq!(c.select_result(5), None);
    assert_eq!(sections(&c), vec!["contact"]);
    assert_eq!(c.last_selected(), None);
}

#[test]
fn accept_without_highlight_does_nothing() {
    let mut c = controller(skills_and_contact());
    settle(&mut c, "touch");
    assert_eq!(c.accept(), None);
    assert!(c.is_visible());
}

#[test]
fn accept_selects_the_highlighted_hit() {
    let config = SearchConfig::default().with_max_results(3);
    let mut c = SearchController::new(rust_records(5), config).unwrap();
    settle(&mut c, "rust");
    assert_eq!(c.hits().len(), 3);

    c.move_selection(Direction::Previous);
    assert_eq!(c.selected_hit().map(|h| h.section.as_str()), Some("post-2"));
    assert_eq!(c.accept().as_deref(), Some("post-2"));
    assert_eq!(c.selected_index(), None);
}
