//! Task domain model.
//!
//! # Responsibility
//! - Define the single task record shared by both board lists.
//! - Provide the monotonic id source used at task creation.
//!
//! # Invariants
//! - `id` is unique across the union of both board lists and is never
//!   reassigned for the lifetime of the process.
//! - `done` starts as `false` and is flipped only by toggle operations;
//!   list membership never implies a `done` value.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values come from [`TaskIdSource`] and are strictly increasing.
pub type TaskId = i64;

/// One to-do record.
///
/// The record is deliberately small: identity, text, and a completion flag.
/// Which board list a task sits in is owned by the store, not the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for lookup and as the rendering key.
    pub id: TaskId,
    /// Text content. Mutable via edit; never trimmed by the core.
    pub text: String,
    /// Completion flag, independent of list membership.
    pub done: bool,
}

impl Task {
    /// Creates a task with the given id and text.
    ///
    /// # Invariants
    /// - `done` starts as `false`.
    /// - The caller supplies a fresh `id` (normally from [`TaskIdSource`]).
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Returns a copy with `done` flipped.
    pub fn with_done_toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Returns a copy with `text` replaced.
    ///
    /// Empty replacement text is allowed; any minimum-length policy lives
    /// in the presentation layer.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// Monotonic id source for task creation.
///
/// Ids are epoch-millisecond timestamps, bumped past the previous value
/// when two tasks are created inside the same millisecond. This keeps ids
/// unique for the process lifetime and increasing in creation order.
#[derive(Debug, Default)]
pub struct TaskIdSource {
    last: TaskId,
}

impl TaskIdSource {
    /// Creates a source with no ids handed out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique id.
    pub fn next_id(&mut self) -> TaskId {
        self.last = epoch_millis().max(self.last + 1);
        self.last
    }
}

fn epoch_millis() -> i64 {
    // A clock before the Unix epoch only loses the timestamp seeding; the
    // `last + 1` bump still keeps ids unique and increasing.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskIdSource};

    #[test]
    fn next_id_is_strictly_increasing() {
        let mut source = TaskIdSource::new();
        let first = source.next_id();
        let second = source.next_id();
        let third = source.next_id();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn with_done_toggled_flips_only_the_flag() {
        let task = Task::new(7, "water plants");
        let toggled = task.with_done_toggled();
        assert!(toggled.done);
        assert_eq!(toggled.id, task.id);
        assert_eq!(toggled.text, task.text);
        assert_eq!(toggled.with_done_toggled(), task);
    }
}
