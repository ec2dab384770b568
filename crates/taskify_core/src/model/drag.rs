//! Drag gesture payload model.
//!
//! # Responsibility
//! - Define the typed record reported by the external gesture detector
//!   once a drag completes.
//!
//! # Invariants
//! - Indices are zero-based positions against the pre-gesture contents of
//!   the named list.
//! - A missing destination means the gesture was cancelled.

use serde::{Deserialize, Serialize};

/// The two ordered lists shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardList {
    /// Pending tasks.
    Active,
    /// Tasks shown as done/archived by membership.
    Completed,
}

impl BoardList {
    /// Stable lowercase label used in diagnostics and on the FFI wire.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// One position on the board: a list and an index into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    /// Which list the position refers to.
    pub list: BoardList,
    /// Zero-based index into that list.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location from list and index.
    pub fn new(list: BoardList, index: usize) -> Self {
        Self { list, index }
    }
}

/// Completed-gesture report from the external drag detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOutcome {
    /// Where the dragged item started.
    pub source: DragLocation,
    /// Where it was dropped, or `None` when the gesture was cancelled.
    pub destination: Option<DragLocation>,
}

impl DragOutcome {
    /// Creates a completed drop between two board positions.
    pub fn dropped(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Creates a cancelled gesture report.
    pub fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}
