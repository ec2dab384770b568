//! Core domain logic for the Taskify board.
//! This crate is the single source of truth for task-list invariants.

pub mod board;
pub mod logging;
pub mod model;
pub mod service;

pub use board::TaskBoard;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::drag::{BoardList, DragLocation, DragOutcome};
pub use model::task::{Task, TaskId, TaskIdSource};
pub use service::drag_resolver::{resolve_drop, TransferError, TransferResult};
pub use service::list_ops::{add_task, delete_task, edit_text, toggle_done};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
