// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hosts that drive a controller's debounce timer.
//!
//! The controller itself never sleeps. Something has to call `poll` when the
//! deadline passes: in the browser that's `setTimeout` on the JavaScript side
//! of the WASM binding, natively it's a tokio task that owns the controller
//! and waits on `sleep_until`.

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "async")]
mod actor;

#[cfg(feature = "async")]
pub use actor::{spawn, SearchHandle, Snapshot};
