//! Filtered view and status counts.
//!
//! # Responsibility
//! - Apply the text and status predicates (logical AND) to the collection.
//! - Tally per-status totals for the filter chips.
//!
//! # Invariants
//! - Blank search text matches everything.
//! - Counts ignore the active filter: chips always show global totals.

use crate::model::task::{Task, TaskStatus};

/// Active status filter chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl StatusFilter {
    /// Whether a task with `status` passes this filter.
    pub fn admits(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::InProgress => status == TaskStatus::InProgress,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Transient query input owned by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskQuery {
    /// Free-text search; matched case-insensitively against title and
    /// description.
    pub search: String,
    /// Active status chip.
    pub filter: StatusFilter,
}

impl TaskQuery {
    pub fn new(search: impl Into<String>, filter: StatusFilter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }
}

/// Global per-status totals over the unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    /// Tallies the whole collection.
    pub fn tally(tasks: &[Task]) -> Self {
        let mut counts = Self {
            all: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Count badge for one filter chip.
    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Pending => self.pending,
            StatusFilter::InProgress => self.in_progress,
            StatusFilter::Completed => self.completed,
        }
    }
}

/// The derived view: what to render, and the chip badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedView<'a> {
    /// Tasks passing both predicates, in collection order.
    pub visible: Vec<&'a Task>,
    /// Global totals, independent of the active query.
    pub counts: StatusCounts,
}

/// Projects the collection through the query.
pub fn project<'a>(tasks: &'a [Task], query: &TaskQuery) -> ProjectedView<'a> {
    let needle = query.search.trim().to_lowercase();
    let visible = tasks
        .iter()
        .filter(|task| matches_text(task, &needle) && query.filter.admits(task.status))
        .collect();

    ProjectedView {
        visible,
        counts: StatusCounts::tally(tasks),
    }
}

fn matches_text(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}
