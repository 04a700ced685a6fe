// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for controller sessions.
//!
//! Replays arbitrary sequences of keystrokes, polls and key presses and checks
//! the selection never points past the hits on screen.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use folio::{default_records, Direction, KeyInput, SearchConfig, SearchController};
use std::time::Duration;

#[derive(Debug, Arbitrary)]
enum Step {
    Type(String, u16),
    Poll(u16),
    Move(bool),
    Select(u8),
    Key(u8),
    Hide,
    Clear,
}

const KEYS: &[&str] = &["Escape", "ArrowDown", "ArrowUp", "Enter", "k", "s", "x"];

fuzz_target!(|steps: Vec<Step>| {
    let Ok(mut controller) = SearchController::new(default_records(), SearchConfig::default())
    else {
        return;
    };
    let mut now = Duration::ZERO;

    for step in steps {
        match step {
            Step::Type(text, gap) => {
                now += Duration::from_millis(gap as u64);
                controller.submit_query(&text, now);
            }
            Step::Poll(gap) => {
                now += Duration::from_millis(gap as u64);
                controller.poll(now);
            }
            Step::Move(forward) => {
                let direction = if forward { Direction::Next } else { Direction::Previous };
                controller.move_selection(direction);
            }
            Step::Select(index) => {
                controller.select_result(index as usize);
            }
            Step::Key(k) => {
                let key = KEYS[k as usize % KEYS.len()];
                controller.handle_key(&KeyInput::new(key).with_ctrl());
                controller.handle_key(&KeyInput::new(key).with_alt());
                controller.handle_key(&KeyInput::new(key));
            }
            Step::Hide => controller.hide(),
            Step::Clear => controller.clear(),
        }

        if let Some(i) = controller.selected_index() {
            assert!(i < controller.hits().len());
        }
        assert!(controller.hits().len() <= controller.config().max_results);
    }
});
