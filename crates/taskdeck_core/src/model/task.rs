//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, projector and storage.
//! - Normalize user-entered title/description text at the admission boundary.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is trimmed and non-blank for every admitted task.
//! - `description` is trimmed; "no description" and empty string are the
//!   same value (`""`).
//! - `updated_at_ms >= created_at_ms`; `created_at_ms` never changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// Stable wire/display token, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

/// Canonical task record.
///
/// Wire field names (`createdAt`/`updatedAt`, kebab-case statuses) match the
/// persisted payload shape, so stored sequences rehydrate field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for targeting commands and drag gestures.
    pub id: TaskId,
    /// Trimmed, non-blank display title.
    pub title: String,
    /// Trimmed free text; empty string when the user gave none.
    #[serde(default)]
    pub description: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Epoch milliseconds at creation. Immutable.
    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,
    /// Epoch milliseconds of the last accepted mutation.
    #[serde(rename = "updatedAt")]
    pub updated_at_ms: i64,
}

impl Task {
    /// Builds a freshly created task.
    ///
    /// Callers are expected to pass an already-normalized title (see
    /// [`normalize_title`]); this constructor does not re-validate.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        now_ms: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Pending,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        }
    }
}

/// Trims a candidate title and rejects blank input.
///
/// Returns `None` for empty or whitespace-only text; commands carrying such
/// a title are dropped by the store.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes an optional description to its stored form.
///
/// Absent and whitespace-only input both become the empty string, so a
/// round-trip through storage cannot distinguish them.
pub fn normalize_description(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}
