//! Observer and navigator hooks, including fault isolation.

use crate::common::*;
use folio::{Navigator, OnSearch, SearchHit, SearchObserver};

struct Exploding;

impl SearchObserver for Exploding {
    fn on_search(&mut self, _query: &str, _hits: &[SearchHit]) {
        panic!("observer bug");
    }

    fn on_select(&mut self, _section: &str) {
        panic!("observer bug");
    }
}

struct BrokenScroll;

impl Navigator for BrokenScroll {
    fn navigate(&mut self, _section: &str) {
        panic!("scroll failed");
    }
}

#[test]
fn panicking_observer_does_not_lose_results() {
    let mut c = controller(skills_and_contact()).with_observer(Exploding);
    settle(&mut c, "touch");
    assert_eq!(sections(&c), vec!["contact"]);

    assert_eq!(c.select_result(0).as_deref(), Some("contact"));
    assert!(!c.is_visible());
}

#[test]
fn panicking_navigator_still_clears_results() {
    let mut c = controller(skills_and_contact()).with_navigator(BrokenScroll);
    settle(&mut c, "touch");

    assert_eq!(c.select_result(0).as_deref(), Some("contact"));
    assert_eq!(c.last_selected(), Some("contact"));
    assert!(c.hits().is_empty());
}

#[test]
fn observer_is_not_called_for_hidden_results() {
    let observer = RecordingObserver::default();
    let log = observer.log();
    let mut c = controller(skills_and_contact()).with_observer(observer);

    settle(&mut c, "a");
    settle(&mut c, "python");

    assert_eq!(
        *log.lock().unwrap(),
        vec![Observed::Search {
            query: "python".to_string(),
            sections: vec![],
        }]
    );
}

#[test]
fn observer_sees_the_trimmed_query() {
    let queries = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&queries);
    let mut c = controller(skills_and_contact()).with_observer(OnSearch(
        move |query: &str, hits: &[SearchHit]| {
            sink.lock().unwrap().push((query.to_string(), hits.len()));
        },
    ));

    settle(&mut c, "  touch  ");
    assert_eq!(*queries.lock().unwrap(), vec![("touch".to_string(), 1)]);
}
