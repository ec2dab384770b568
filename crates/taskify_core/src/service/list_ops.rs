//! List mutation operations.
//!
//! # Responsibility
//! - Provide the four mutators (add, toggle, delete, edit) as pure
//!   functions: same inputs, same output, no external state consulted.
//!
//! # Invariants
//! - Every function returns a freshly allocated sequence; the input is
//!   never aliased or mutated.
//! - Unknown ids are a silent no-op: the result equals the input by value.
//! - Relative order of untouched tasks is preserved.

use crate::model::task::{Task, TaskId};

/// Appends a new task built from `id` and `text`.
///
/// # Contract
/// - Empty `text` is rejected as a no-op; the returned list equals the
///   input. Whitespace is not trimmed before the check.
/// - The new task starts with `done = false`.
/// - The caller supplies a fresh `id`; uniqueness is the id source's job.
pub fn add_task(list: &[Task], id: TaskId, text: &str) -> Vec<Task> {
    let mut next = list.to_vec();
    if !text.is_empty() {
        next.push(Task::new(id, text));
    }
    next
}

/// Flips the `done` flag of the task matching `id`.
///
/// All other tasks are unchanged by value and position. Unknown `id`
/// returns the input unchanged.
pub fn toggle_done(list: &[Task], id: TaskId) -> Vec<Task> {
    list.iter()
        .map(|task| {
            if task.id == id {
                task.with_done_toggled()
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Removes the task matching `id`, preserving the order of the rest.
///
/// Unknown `id` returns the input unchanged.
pub fn delete_task(list: &[Task], id: TaskId) -> Vec<Task> {
    list.iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect()
}

/// Replaces the text of the task matching `id`.
///
/// Empty replacement text is allowed. Unknown `id` returns the input
/// unchanged.
pub fn edit_text(list: &[Task], id: TaskId, new_text: &str) -> Vec<Task> {
    list.iter()
        .map(|task| {
            if task.id == id {
                task.with_text(new_text)
            } else {
                task.clone()
            }
        })
        .collect()
}
