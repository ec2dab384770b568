//! Drag transfer resolver.
//!
//! # Responsibility
//! - Turn a completed-gesture report into the new contents of both board
//!   lists, either reordering within one list or transferring across.
//!
//! # Invariants
//! - Cancelled gestures and same-slot drops change nothing.
//! - Exactly one task is relocated otherwise; the total task count across
//!   both lists is preserved by every transfer.
//! - A move never touches the `done` flag; only toggle operations do.
//! - Out-of-range indices are rejected with no mutation, never clamped.

use crate::model::drag::{BoardList, DragOutcome};
use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TransferResult<T> = Result<T, TransferError>;

/// Rejection of a gesture whose indices do not fit the current lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    /// Source index is outside the source list.
    SourceIndexOutOfRange {
        list: BoardList,
        index: usize,
        len: usize,
    },
    /// Destination index is outside `[0, len]` of the insertion list. For
    /// a same-list move `len` is the length after removal.
    DestinationIndexOutOfRange {
        list: BoardList,
        index: usize,
        len: usize,
    },
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceIndexOutOfRange { list, index, len } => write!(
                f,
                "drag source index {index} out of range for {} list of length {len}",
                list.label()
            ),
            Self::DestinationIndexOutOfRange { list, index, len } => write!(
                f,
                "drag destination index {index} out of range for {} list of length {len}",
                list.label()
            ),
        }
    }
}

impl Error for TransferError {}

/// Resolves a completed drag gesture against the current board lists.
///
/// # Contract
/// - `destination = None` (cancelled gesture) returns both lists unchanged.
/// - Same list and same index returns both lists unchanged.
/// - Otherwise the task at the source position is removed and inserted at
///   the destination position. For a same-list move the destination index
///   is applied to the already-shortened list, the standard reorder
///   semantics for index-based drag results.
/// - Returns freshly allocated sequences; the inputs are never mutated.
///
/// # Errors
/// - `SourceIndexOutOfRange` when the source index does not name a task.
/// - `DestinationIndexOutOfRange` when the destination index exceeds the
///   insertion list length. Both leave the board untouched.
pub fn resolve_drop(
    active: &[Task],
    completed: &[Task],
    outcome: &DragOutcome,
) -> TransferResult<(Vec<Task>, Vec<Task>)> {
    let source = outcome.source;
    let Some(destination) = outcome.destination else {
        return Ok((active.to_vec(), completed.to_vec()));
    };
    if destination == source {
        return Ok((active.to_vec(), completed.to_vec()));
    }

    let source_len = match source.list {
        BoardList::Active => active.len(),
        BoardList::Completed => completed.len(),
    };
    if source.index >= source_len {
        return Err(TransferError::SourceIndexOutOfRange {
            list: source.list,
            index: source.index,
            len: source_len,
        });
    }

    let mut active = active.to_vec();
    let mut completed = completed.to_vec();

    let moved = list_mut(&mut active, &mut completed, source.list).remove(source.index);

    let dest_list = list_mut(&mut active, &mut completed, destination.list);
    if destination.index > dest_list.len() {
        return Err(TransferError::DestinationIndexOutOfRange {
            list: destination.list,
            index: destination.index,
            len: dest_list.len(),
        });
    }
    dest_list.insert(destination.index, moved);

    Ok((active, completed))
}

fn list_mut<'a>(
    active: &'a mut Vec<Task>,
    completed: &'a mut Vec<Task>,
    which: BoardList,
) -> &'a mut Vec<Task> {
    match which {
        BoardList::Active => active,
        BoardList::Completed => completed,
    }
}
