// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trailing-edge debounce without a clock.
//!
//! The host owns time. It passes `now` (any monotonic `Duration` since an
//! origin it picks, e.g. `performance.now()` in a browser) to `schedule` and
//! `poll`. Scheduling while something is pending replaces the value and moves
//! the deadline, so only the last call in a burst ever comes out of `poll`.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Duration,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to fire at `now + delay`, discarding anything pending.
    ///
    /// Returns the new deadline.
    pub fn schedule(&mut self, value: T, now: Duration) -> Duration {
        let deadline = now.saturating_add(self.delay);
        self.pending = Some(Pending { deadline, value });
        deadline
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Take the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
