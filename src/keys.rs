// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard shortcuts for the search box.
//!
//! Key names follow `KeyboardEvent.key` so a page can forward events as-is.

use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// A key press, as the page saw it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyInput {
    pub key: String,
    #[serde(alias = "ctrlKey")]
    pub ctrl: bool,
    /// Cmd on macOS.
    #[serde(alias = "metaKey")]
    pub meta: bool,
    /// Option on macOS.
    #[serde(alias = "altKey")]
    pub alt: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// The search command this key triggers, if any.
    pub fn command(&self) -> Option<KeyCommand> {
        if (self.ctrl || self.meta) && self.key.eq_ignore_ascii_case("k") {
            return Some(KeyCommand::FocusSearch);
        }
        if self.alt && self.key.eq_ignore_ascii_case("s") {
            return Some(KeyCommand::FocusSearch);
        }
        match self.key.as_str() {
            "Escape" => Some(KeyCommand::Cancel),
            "ArrowDown" => Some(KeyCommand::Move(Direction::Next)),
            "ArrowUp" => Some(KeyCommand::Move(Direction::Previous)),
            "Enter" => Some(KeyCommand::Accept),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyCommand {
    FocusSearch,
    Cancel,
    Move(Direction),
    Accept,
}
