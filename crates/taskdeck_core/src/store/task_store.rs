//! The authoritative task reducer.
//!
//! # Responsibility
//! - Turn `(current state, command)` into the next state.
//! - Enforce admission invariants (trimmed non-blank titles, unique ids,
//!   permutation-only reorders).
//!
//! # Invariants
//! - All operations are total: an invalid command returns a value-equal copy
//!   of the input state.
//! - The store performs no I/O; time and identity come from collaborator
//!   traits, durability from the session layer.

use crate::clock::{Clock, SystemClock};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::model::task::{normalize_description, normalize_title, Task, TaskId, TaskStatus};
use crate::store::command::Command;

/// Pure reducer over the ordered task collection.
///
/// Generic over its two nondeterminism sources so tests can pin both.
pub struct TaskStore<C: Clock, G: IdGenerator> {
    clock: C,
    ids: G,
}

impl TaskStore<SystemClock, UuidGenerator> {
    /// Store wired to the wall clock and UUID v4 ids.
    pub fn system() -> Self {
        Self::new(SystemClock, UuidGenerator)
    }
}

impl Default for TaskStore<SystemClock, UuidGenerator> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock, G: IdGenerator> TaskStore<C, G> {
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Applies one command and returns the next authoritative state.
    ///
    /// The single dispatch entry point: every mutation in the system goes
    /// through here.
    pub fn apply(&self, tasks: &[Task], command: Command) -> Vec<Task> {
        match command {
            Command::Create { title, description } => {
                self.create(tasks, &title, description.as_deref())
            }
            Command::Update {
                id,
                title,
                description,
            } => self.update(tasks, id, &title, description.as_deref()),
            Command::SetStatus { id, status } => self.set_status(tasks, id, status),
            Command::Delete { id } => Self::delete(tasks, id),
            Command::Reorder { from, to } => Self::reorder(tasks, from, to),
            Command::Rehydrate(restored) => restored,
        }
    }

    /// Prepends a fresh `Pending` task; no-op when the trimmed title is
    /// blank.
    fn create(&self, tasks: &[Task], title: &str, description: Option<&str>) -> Vec<Task> {
        let Some(title) = normalize_title(title) else {
            return tasks.to_vec();
        };

        let task = Task::new(
            self.ids.next_id(),
            title,
            normalize_description(description),
            self.clock.now_epoch_ms(),
        );

        let mut next = Vec::with_capacity(tasks.len() + 1);
        next.push(task);
        next.extend_from_slice(tasks);
        next
    }

    /// Rewrites title/description of the matching task and bumps its
    /// `updated_at_ms`; no-op on unknown id or blank title.
    fn update(&self, tasks: &[Task], id: TaskId, title: &str, description: Option<&str>) -> Vec<Task> {
        let Some(title) = normalize_title(title) else {
            return tasks.to_vec();
        };
        if !tasks.iter().any(|task| task.id == id) {
            return tasks.to_vec();
        }

        let now_ms = self.clock.now_epoch_ms();
        tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    let mut edited = task.clone();
                    edited.title = title.clone();
                    edited.description = normalize_description(description);
                    edited.updated_at_ms = now_ms;
                    edited
                } else {
                    task.clone()
                }
            })
            .collect()
    }

    /// Moves the matching task to `status` and bumps its `updated_at_ms`;
    /// no-op on unknown id.
    fn set_status(&self, tasks: &[Task], id: TaskId, status: TaskStatus) -> Vec<Task> {
        if !tasks.iter().any(|task| task.id == id) {
            return tasks.to_vec();
        }

        let now_ms = self.clock.now_epoch_ms();
        tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    let mut moved = task.clone();
                    moved.status = status;
                    moved.updated_at_ms = now_ms;
                    moved
                } else {
                    task.clone()
                }
            })
            .collect()
    }

    /// Removes the matching task; the rest keep their relative order.
    fn delete(tasks: &[Task], id: TaskId) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect()
    }

    /// Move semantics: the element at `from` is removed and reinserted so it
    /// lands at `to` counted against the shortened sequence. Out-of-bounds
    /// indices and `from == to` are no-ops.
    fn reorder(tasks: &[Task], from: usize, to: usize) -> Vec<Task> {
        if from == to || from >= tasks.len() || to >= tasks.len() {
            return tasks.to_vec();
        }

        let mut next = tasks.to_vec();
        let task = next.remove(from);
        next.insert(to, task);
        next
    }
}
