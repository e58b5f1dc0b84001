//! Mutation commands accepted by the task store.

use crate::model::task::{Task, TaskId, TaskStatus};

/// An intent to mutate the task collection.
///
/// Drivers translate their input events into exactly these variants and feed
/// them to a single dispatch entry point, so every state transition flows
/// through one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Admit a new task at the front of the collection.
    Create {
        title: String,
        description: Option<String>,
    },
    /// Replace title/description of an existing task.
    Update {
        id: TaskId,
        title: String,
        description: Option<String>,
    },
    /// Move an existing task to another lifecycle state.
    SetStatus { id: TaskId, status: TaskStatus },
    /// Remove a task.
    Delete { id: TaskId },
    /// Move the task at `from` so it ends up at `to` (move, not swap).
    Reorder { from: usize, to: usize },
    /// Replace the whole collection with restored state, verbatim.
    Rehydrate(Vec<Task>),
}

impl Command {
    /// Stable label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::SetStatus { .. } => "set_status",
            Self::Delete { .. } => "delete",
            Self::Reorder { .. } => "reorder",
            Self::Rehydrate(_) => "rehydrate",
        }
    }
}
