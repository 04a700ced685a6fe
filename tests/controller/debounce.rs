//! Trailing-edge debouncing of query input.

use crate::common::*;
use folio::{ResultsView, SearchConfig, SearchController, SearchEvent};
use std::time::Duration;

#[test]
fn burst_of_input_evaluates_once_with_last_text() {
    let mut c = controller(skills_and_contact());

    c.submit_query("s", ms(0));
    c.submit_query("sk", ms(100));
    c.submit_query("ski", ms(200));

    assert!(!c.poll(ms(450)), "window restarted at 200ms");
    assert!(c.poll(ms(500)));
    assert!(!c.poll(ms(2_000)), "nothing left to run");

    assert_eq!(c.evaluation_count(), 1);
    assert_eq!(sections(&c), vec!["skills"]);
}

#[test]
fn nothing_runs_before_the_deadline() {
    let mut c = controller(skills_and_contact());
    c.submit_query("skills", ms(1_000));

    assert_eq!(c.next_deadline(), Some(ms(1_300)));
    assert!(!c.poll(ms(1_299)));
    assert_eq!(c.results(), &ResultsView::Hidden);
    assert!(c.drain_events().is_empty());
}

#[test]
fn pending_query_tracks_raw_input_immediately() {
    let mut c = controller(skills_and_contact());
    c.submit_query("  touch ", ms(0));
    assert_eq!(c.pending_query(), "  touch ");
    assert_eq!(c.evaluation_count(), 0);
}

#[test]
fn zero_delay_evaluates_on_next_poll() {
    let config = SearchConfig::default().with_debounce_delay(Duration::ZERO);
    let mut c = SearchController::new(skills_and_contact(), config).unwrap();

    c.submit_query("touch", ms(50));
    assert!(c.poll(ms(50)));
    assert_eq!(sections(&c), vec!["contact"]);
}

#[test]
fn clear_cancels_pending_evaluation() {
    let mut c = controller(skills_and_contact());
    c.submit_query("skills", ms(0));
    c.clear();

    assert_eq!(c.next_deadline(), None);
    assert!(!c.poll(ms(1_000)));
    assert_eq!(c.evaluation_count(), 0);
    assert_eq!(c.drain_events(), vec![SearchEvent::HideResults]);
}

#[test]
fn teardown_stops_the_timer_and_ignores_input() {
    let mut c = controller(skills_and_contact());
    c.submit_query("skills", ms(0));
    c.teardown();

    assert!(c.is_torn_down());
    assert!(!c.poll(ms(1_000)));

    c.submit_query("touch", ms(2_000));
    assert!(!c.poll(ms(5_000)));
    assert_eq!(c.evaluation_count(), 0);
}

#[test]
fn each_settled_query_replaces_the_previous_results() {
    let mut c = controller(skills_and_contact());

    c.submit_query("skills", ms(0));
    c.poll(ms(300));
    assert_eq!(sections(&c), vec!["skills"]);

    c.submit_query("touch", ms(1_000));
    c.poll(ms(1_300));
    assert_eq!(sections(&c), vec!["contact"]);

    assert_eq!(
        c.drain_events(),
        vec![
            SearchEvent::ShowResults { count: 1 },
            SearchEvent::ShowResults { count: 1 },
        ]
    );
}

#[test]
fn hide_keeps_the_typed_query_and_its_timer() {
    let mut c = controller(skills_and_contact());
    c.submit_query("skills", ms(0));
    c.poll(ms(300));
    c.submit_query("touch", ms(400));
    c.drain_events();

    c.hide();
    assert_eq!(c.results(), &ResultsView::Hidden);
    assert_eq!(c.pending_query(), "touch");
    assert_eq!(c.next_deadline(), Some(ms(700)));
    assert_eq!(c.drain_events(), vec![SearchEvent::HideResults]);

    assert!(c.poll(ms(700)));
    assert_eq!(sections(&c), vec!["contact"]);
}

#[test]
fn single_emoji_meets_the_minimum_length() {
    let mut c = controller(skills_and_contact());
    c.submit_query("😀", ms(0));
    assert!(c.poll(ms(300)));
    assert_eq!(c.results(), &ResultsView::Shown(vec![]));
    assert_eq!(c.drain_events(), vec![SearchEvent::ShowResults { count: 0 }]);
}
