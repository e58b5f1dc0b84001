//! Drag-reorder gesture state machine.
//!
//! # Responsibility
//! - Track the in-flight drag source and hover target.
//! - Resolve a drop into at most one `Reorder` command against the live
//!   collection.
//!
//! # Invariants
//! - Every gesture terminates in `Idle`.
//! - A drop on the drag source, or with a stale/unresolvable id, mutates
//!   nothing.
//! - Gesture state is transient and never persisted.

use crate::model::task::{Task, TaskId};
use crate::store::command::Command;

/// Transient drag state owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    /// No drag in flight.
    #[default]
    Idle,
    /// Dragging `source`; `hover` tracks the task currently under the
    /// pointer, updated continuously.
    Dragging {
        source: TaskId,
        hover: Option<TaskId>,
    },
}

impl DragGesture {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Begins a gesture over `source`. Re-entrant: a second drag-start
    /// replaces any gesture already in flight.
    pub fn drag_start(&mut self, source: TaskId) {
        *self = Self::Dragging {
            source,
            hover: None,
        };
    }

    /// Updates the hover target while dragging; ignored when idle.
    pub fn drag_over(&mut self, target: TaskId) {
        if let Self::Dragging { source, .. } = *self {
            *self = Self::Dragging {
                source,
                hover: Some(target),
            };
        }
    }

    /// Resolves a drop over `target` against the live collection.
    ///
    /// Returns the reorder command to dispatch, or `None` when the drop must
    /// not mutate state (idle, self-drop, or an id that no longer resolves).
    /// The gesture always returns to `Idle`.
    pub fn drop_on(&mut self, target: TaskId, tasks: &[Task]) -> Option<Command> {
        let Self::Dragging { source, .. } = *self else {
            return None;
        };
        *self = Self::Idle;

        if source == target {
            return None;
        }
        let from = index_of(tasks, source)?;
        let to = index_of(tasks, target)?;
        Some(Command::Reorder { from, to })
    }

    /// Cancels the gesture (drop outside any target, or aborted drag).
    pub fn drag_end(&mut self) {
        *self = Self::Idle;
    }

    /// Id being dragged, if any. Drivers use this for drag styling.
    pub fn source(&self) -> Option<TaskId> {
        match self {
            Self::Dragging { source, .. } => Some(*source),
            Self::Idle => None,
        }
    }

    /// Current hover target, if any. Drivers use this for drop styling.
    pub fn hover(&self) -> Option<TaskId> {
        match self {
            Self::Dragging { hover, .. } => *hover,
            Self::Idle => None,
        }
    }
}

fn index_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id == id)
}
