//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the board's event contract to Dart via FRB: submit, toggle,
//!   delete, edit, drag-complete, and render-state snapshots.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide board instance backs every call; the mutex only
//!   serializes the FFI boundary, core logic stays single-threaded.

use std::sync::{Mutex, OnceLock};
use taskify_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, BoardList, DragLocation, DragOutcome, Task, TaskBoard,
};

static BOARD: OnceLock<Mutex<TaskBoard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   empty selects the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent);
///   reconfiguration attempts return an error message.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let effective_level = if level.trim().is_empty() {
        default_log_level()
    } else {
        level.as_str()
    };
    match init_logging_inner(effective_level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Render projection of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable task id, also the rendering key.
    pub id: i64,
    /// Task text content.
    pub text: String,
    /// Completion flag, independent of which list the task sits in.
    pub done: bool,
}

/// Render-state snapshot of the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Active list in render order.
    pub active: Vec<TaskView>,
    /// Completed list in render order.
    pub completed: Vec<TaskView>,
    /// Current input-field text.
    pub draft: String,
}

/// Generic action response envelope for board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation was accepted.
    pub ok: bool,
    /// Task id the operation created or addressed, when applicable.
    pub task_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<i64>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current board state for rendering.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; always returns a complete snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardSnapshot {
    with_board(|board| BoardSnapshot {
        active: board.active().iter().map(to_task_view).collect(),
        completed: board.completed().iter().map(to_task_view).collect(),
        draft: board.draft().to_owned(),
    })
}

/// Replaces the input-field draft text.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_set_draft(text: String) {
    with_board(|board| board.set_draft(text));
}

/// Adds a new task to the active list from submitted text.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Empty text is accepted as a silent no-op, not an error; no task id
///   is returned.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_task(text: String) -> TaskActionResponse {
    with_board(|board| match board.submit_new_task(text.as_str()) {
        Some(id) => TaskActionResponse::success("Task added.", Some(id)),
        None => TaskActionResponse::success("Empty text; nothing added.", None),
    })
}

/// Submits the current draft, the form-submit path of the UI.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Clears the draft when a task was added.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_draft() -> TaskActionResponse {
    with_board(|board| match board.submit_draft() {
        Some(id) => TaskActionResponse::success("Task added.", Some(id)),
        None => TaskActionResponse::success("Empty draft; nothing added.", None),
    })
}

/// Flips the completion flag of one task.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown ids are a silent no-op reported in the message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_done(task_id: i64) -> TaskActionResponse {
    with_board(|board| {
        if board.toggle_done(task_id) {
            TaskActionResponse::success("Task toggled.", Some(task_id))
        } else {
            TaskActionResponse::success("No matching task; board unchanged.", None)
        }
    })
}

/// Deletes one task from whichever list holds it.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown ids are a silent no-op reported in the message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_task(task_id: i64) -> TaskActionResponse {
    with_board(|board| {
        if board.delete_task(task_id) {
            TaskActionResponse::success("Task deleted.", Some(task_id))
        } else {
            TaskActionResponse::success("No matching task; board unchanged.", None)
        }
    })
}

/// Replaces the text of one task.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Empty replacement text is allowed; edit gating is a UI policy.
/// - Unknown ids are a silent no-op reported in the message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_task(task_id: i64, text: String) -> TaskActionResponse {
    with_board(|board| {
        if board.edit_task(task_id, text.as_str()) {
            TaskActionResponse::success("Task edited.", Some(task_id))
        } else {
            TaskActionResponse::success("No matching task; board unchanged.", None)
        }
    })
}

/// Applies a completed drag gesture reported by the UI's drag detector.
///
/// Input semantics:
/// - List names are `active` or `completed`.
/// - `dest_list`/`dest_index` must be both present (a drop) or both absent
///   (a cancelled gesture).
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Out-of-range indices are rejected with `ok = false` and the board is
///   left unchanged.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_complete(
    source_list: String,
    source_index: u32,
    dest_list: Option<String>,
    dest_index: Option<u32>,
) -> TaskActionResponse {
    let Some(source) = parse_board_list(source_list.as_str()) else {
        return TaskActionResponse::failure(format!("unknown source list `{source_list}`"));
    };
    let source = DragLocation::new(source, source_index as usize);

    let outcome = match (dest_list, dest_index) {
        (None, None) => DragOutcome::cancelled(source),
        (Some(list), Some(index)) => match parse_board_list(list.as_str()) {
            Some(dest) => {
                DragOutcome::dropped(source, DragLocation::new(dest, index as usize))
            }
            None => {
                return TaskActionResponse::failure(format!("unknown destination list `{list}`"))
            }
        },
        _ => {
            return TaskActionResponse::failure(
                "destination list and index must be both present or both absent",
            )
        }
    };

    with_board(|board| match board.drag_complete(&outcome) {
        Ok(()) => TaskActionResponse::success("Drag applied.", None),
        Err(err) => TaskActionResponse::failure(format!("board_drag_complete failed: {err}")),
    })
}

fn with_board<T>(f: impl FnOnce(&mut TaskBoard) -> T) -> T {
    let board = BOARD.get_or_init(|| Mutex::new(TaskBoard::new()));
    let mut guard = match board.lock() {
        Ok(guard) => guard,
        // A panic while holding the lock leaves valid state behind; keep
        // serving rather than poisoning every later UI call.
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

fn to_task_view(task: &Task) -> TaskView {
    TaskView {
        id: task.id,
        text: task.text.clone(),
        done: task.done,
    }
}

fn parse_board_list(value: &str) -> Option<BoardList> {
    match value {
        "active" => Some(BoardList::Active),
        "completed" => Some(BoardList::Completed),
        _ => None,
    }
}
