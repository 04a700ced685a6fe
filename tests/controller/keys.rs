//! Keyboard shortcuts routed through `handle_key`.

use crate::common::*;
use folio::{KeyInput, SearchEvent};

#[test]
fn ctrl_k_asks_for_focus_even_when_hidden() {
    let mut c = controller(skills_and_contact());
    assert!(c.handle_key(&KeyInput::new("k").with_ctrl()));
    assert!(c.handle_key(&KeyInput::new("K").with_meta()));
    assert_eq!(
        c.drain_events(),
        vec![SearchEvent::FocusInput, SearchEvent::FocusInput]
    );
}

#[test]
fn panel_keys_are_ignored_while_hidden() {
    let mut c = controller(skills_and_contact());
    for key in ["Escape", "ArrowDown", "ArrowUp", "Enter"] {
        assert!(!c.handle_key(&KeyInput::new(key)), "{key} should be ignored");
    }
    assert!(c.drain_events().is_empty());
}

#[test]
fn arrows_then_enter_navigate() {
    let mut c = controller(rust_records(3));
    settle(&mut c, "rust");

    assert!(c.handle_key(&KeyInput::new("ArrowDown")));
    assert!(c.handle_key(&KeyInput::new("ArrowDown")));
    assert!(c.handle_key(&KeyInput::new("ArrowUp")));
    assert_eq!(c.selected_index(), Some(0));

    assert!(c.handle_key(&KeyInput::new("Enter")));
    assert_eq!(c.last_selected(), Some("post-0"));
    assert!(!c.is_visible());
}

#[test]
fn enter_without_highlight_is_not_handled() {
    let mut c = controller(skills_and_contact());
    settle(&mut c, "touch");
    assert!(!c.handle_key(&KeyInput::new("Enter")));
    assert!(c.is_visible());
}

#[test]
fn escape_closes_the_panel() {
    let mut c = controller(skills_and_contact());
    settle(&mut c, "touch");
    c.drain_events();

    assert!(c.handle_key(&KeyInput::new("Escape")));
    assert!(!c.is_visible());
    assert_eq!(c.pending_query(), "");
    assert_eq!(c.drain_events(), vec![SearchEvent::HideResults]);
}

#[test]
fn unrelated_keys_fall_through() {
    let mut c = controller(skills_and_contact());
    settle(&mut c, "touch");
    assert!(!c.handle_key(&KeyInput::new("a")));
    assert!(!c.handle_key(&KeyInput::new("Tab")));
}

#[test]
fn alt_s_asks_for_focus_even_when_hidden() {
    let mut c = controller(skills_and_contact());
    assert!(c.handle_key(&KeyInput::new("s").with_alt()));
    assert!(!c.handle_key(&KeyInput::new("s")));
    assert_eq!(c.drain_events(), vec![SearchEvent::FocusInput]);
}
