//! Task board store.
//!
//! # Responsibility
//! - Own the two ordered task lists and the current input-field draft.
//! - Apply presentation-layer events through the pure operations in
//!   `service`, one event per state transition.
//!
//! # Invariants
//! - A task belongs to exactly one list at any time; ids are unique across
//!   the union of both lists.
//! - Every mutation swaps in freshly built sequences; an observed state is
//!   never mutated in place afterwards.
//! - Log events carry metadata only, never task text.

use crate::model::drag::DragOutcome;
use crate::model::task::{Task, TaskId, TaskIdSource};
use crate::service::drag_resolver::{resolve_drop, TransferResult};
use crate::service::list_ops;
use log::{debug, warn};

/// In-memory store behind the single-page task list.
///
/// The board is single-threaded and synchronous: the presentation layer
/// invokes one entry point per user event and re-renders from the exposed
/// sequences afterwards.
#[derive(Debug, Default)]
pub struct TaskBoard {
    active: Vec<Task>,
    completed: Vec<Task>,
    draft: String,
    id_source: TaskIdSource,
}

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending tasks in render order.
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Completed-list tasks in render order.
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Current input-field text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Looks a task up by id across both lists.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.active
            .iter()
            .chain(self.completed.iter())
            .find(|task| task.id == id)
    }

    /// Replaces the input-field draft.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Adds a new task to the active list from submitted text.
    ///
    /// # Contract
    /// - Empty text is a silent no-op returning `None`; the draft is kept.
    /// - Otherwise a fresh id is minted, the task is appended with
    ///   `done = false`, the draft is cleared, and the id is returned.
    pub fn submit_new_task(&mut self, text: &str) -> Option<TaskId> {
        if text.is_empty() {
            return None;
        }
        let id = self.id_source.next_id();
        self.active = list_ops::add_task(&self.active, id, text);
        self.draft.clear();
        debug!(
            "event=task_added module=board id={id} text_len={}",
            text.len()
        );
        Some(id)
    }

    /// Submits the current draft, the form-submit path of the UI.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = self.draft.clone();
        self.submit_new_task(draft.as_str())
    }

    /// Flips the `done` flag of the task matching `id`.
    ///
    /// Returns `false` (and leaves the board unchanged) when no task has
    /// that id. The task keeps its list and position either way.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        if contains(&self.active, id) {
            self.active = list_ops::toggle_done(&self.active, id);
        } else if contains(&self.completed, id) {
            self.completed = list_ops::toggle_done(&self.completed, id);
        } else {
            return false;
        }
        debug!("event=task_toggled module=board id={id}");
        true
    }

    /// Removes the task matching `id` from whichever list holds it.
    ///
    /// Returns `false` when no task has that id.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        if contains(&self.active, id) {
            self.active = list_ops::delete_task(&self.active, id);
        } else if contains(&self.completed, id) {
            self.completed = list_ops::delete_task(&self.completed, id);
        } else {
            return false;
        }
        debug!("event=task_deleted module=board id={id}");
        true
    }

    /// Replaces the text of the task matching `id`.
    ///
    /// Empty replacement text is allowed; gating edits on `done` is a
    /// presentation-layer policy. Returns `false` when no task has that id.
    pub fn edit_task(&mut self, id: TaskId, new_text: &str) -> bool {
        if contains(&self.active, id) {
            self.active = list_ops::edit_text(&self.active, id, new_text);
        } else if contains(&self.completed, id) {
            self.completed = list_ops::edit_text(&self.completed, id, new_text);
        } else {
            return false;
        }
        debug!(
            "event=task_edited module=board id={id} text_len={}",
            new_text.len()
        );
        true
    }

    /// Applies a completed drag gesture to both lists.
    ///
    /// # Errors
    /// Propagates `TransferError` from the resolver; the board is left
    /// untouched on rejection.
    pub fn drag_complete(&mut self, outcome: &DragOutcome) -> TransferResult<()> {
        match resolve_drop(&self.active, &self.completed, outcome) {
            Ok((active, completed)) => {
                self.active = active;
                self.completed = completed;
                if let Some(dest) = outcome.destination {
                    debug!(
                        "event=drag_applied module=board source={}:{} dest={}:{}",
                        outcome.source.list.label(),
                        outcome.source.index,
                        dest.list.label(),
                        dest.index
                    );
                }
                Ok(())
            }
            Err(err) => {
                warn!("event=drag_rejected module=board reason={err}");
                Err(err)
            }
        }
    }
}

fn contains(list: &[Task], id: TaskId) -> bool {
    list.iter().any(|task| task.id == id)
}
