// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A tokio task that owns one controller.
//!
//! The controller is single-owner state, so instead of sharing it behind a
//! lock it lives inside one task. Handles send commands over a channel; the
//! task waits on whichever comes first, the next command or the debounce
//! deadline, and forwards every emitted [`SearchEvent`] to the event channel.
//!
//! A new submission moves the deadline, and the next loop turn sleeps until
//! the new one. That re-arm is the cancellation: no timer handle to abort.

use crate::controller::SearchController;
use crate::error::{FolioError, Result};
use crate::keys::KeyInput;
use crate::types::{Direction, ResultsView, SearchEvent, SearchRecord};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

const COMMAND_BUFFER: usize = 64;

enum Command {
    Submit(String),
    Move(Direction),
    Select(usize),
    Accept,
    Hide,
    Clear,
    Key(KeyInput),
    AddRecords(Vec<SearchRecord>, oneshot::Sender<Result<()>>),
    ReplaceRecords(Vec<SearchRecord>, oneshot::Sender<Result<()>>),
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

/// Point-in-time copy of what the panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pending_query: String,
    pub results: ResultsView,
    pub selected: Option<usize>,
    pub evaluations: u64,
}

/// Cheap, cloneable sender side of a running search task.
#[derive(Debug, Clone)]
pub struct SearchHandle {
    commands: mpsc::Sender<Command>,
}

/// Move `controller` into a new task.
///
/// Returns the handle, the event stream, and the task's join handle, which
/// yields the (torn down) controller once every handle is dropped or
/// [`SearchHandle::shutdown`] is called.
pub fn spawn(
    controller: SearchController,
) -> (
    SearchHandle,
    mpsc::UnboundedReceiver<SearchEvent>,
    JoinHandle<SearchController>,
) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(controller, command_rx, event_tx));
    (SearchHandle { commands: command_tx }, event_rx, task)
}

impl SearchHandle {
    pub async fn submit_query(&self, raw: impl Into<String>) -> Result<()> {
        self.send(Command::Submit(raw.into())).await
    }

    pub async fn move_selection(&self, direction: Direction) -> Result<()> {
        self.send(Command::Move(direction)).await
    }

    pub async fn select_result(&self, index: usize) -> Result<()> {
        self.send(Command::Select(index)).await
    }

    pub async fn accept(&self) -> Result<()> {
        self.send(Command::Accept).await
    }

    /// Close the panel, keeping the input and any pending evaluation.
    pub async fn hide(&self) -> Result<()> {
        self.send(Command::Hide).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.send(Command::Clear).await
    }

    pub async fn handle_key(&self, key: KeyInput) -> Result<()> {
        self.send(Command::Key(key)).await
    }

    pub async fn add_records(&self, records: Vec<SearchRecord>) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::AddRecords(records, tx)).await?;
        rx.await.map_err(|_| FolioError::Closed)?
    }

    pub async fn replace_records(&self, records: Vec<SearchRecord>) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::ReplaceRecords(records, tx)).await?;
        rx.await.map_err(|_| FolioError::Closed)?
    }

    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx)).await?;
        rx.await.map_err(|_| FolioError::Closed)
    }

    /// Stop the task. Pending evaluations are discarded.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| FolioError::Closed)
    }
}

async fn run(
    mut controller: SearchController,
    mut commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<SearchEvent>,
) -> SearchController {
    let origin = Instant::now();

    loop {
        let deadline = controller.next_deadline().map(|d| origin + d);

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Shutdown) | None => break,
                Some(command) => apply(&mut controller, command, origin),
            },
            () = sleep_until_deadline(deadline) => {
                controller.poll(origin.elapsed());
            }
        }

        for event in controller.drain_events() {
            // Nobody listening is fine; the panel state is still queryable
            let _ = events.send(event);
        }
    }

    controller.teardown();
    tracing::debug!("search task stopped");
    controller
}

fn apply(controller: &mut SearchController, command: Command, origin: Instant) {
    match command {
        Command::Submit(raw) => controller.submit_query(&raw, origin.elapsed()),
        Command::Move(direction) => {
            controller.move_selection(direction);
        }
        Command::Select(index) => {
            controller.select_result(index);
        }
        Command::Accept => {
            controller.accept();
        }
        Command::Hide => controller.hide(),
        Command::Clear => controller.clear(),
        Command::Key(key) => {
            controller.handle_key(&key);
        }
        Command::AddRecords(records, reply) => {
            let _ = reply.send(controller.add_records(records));
        }
        Command::ReplaceRecords(records, reply) => {
            let _ = reply.send(controller.replace_records(records));
        }
        Command::Snapshot(reply) => {
            let _ = reply.send(Snapshot {
                pending_query: controller.pending_query().to_string(),
                results: controller.results().clone(),
                selected: controller.selected_index(),
                evaluations: controller.evaluation_count(),
            });
        }
        Command::Shutdown => {}
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
