//! Persistence collaborator boundary.
//!
//! # Responsibility
//! - Define the storage contract the session shell depends on.
//! - Keep payload encoding (JSON under versioned keys) inside this layer.
//!
//! # Invariants
//! - `load` reports malformed payloads as absent data, never as a startup
//!   failure.
//! - Storage never mutates task state; in-memory state stays the source of
//!   truth for the running session.

use crate::model::task::Task;
use crate::model::theme::Theme;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryTaskStorage;
pub use sqlite::SqliteTaskStorage;

/// Versioned key holding the serialized task sequence.
pub const TASKS_KEY: &str = "taskdeck.tasks.v1";
/// Versioned key holding the theme preference token.
pub const THEME_KEY: &str = "taskdeck.theme.v1";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
///
/// Malformed *payloads* are not errors (they read as absent data); this type
/// covers the cases where the backend itself could not be reached or the
/// state could not be encoded.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
    /// Backend refused the operation (used by test doubles).
    Unavailable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode state: {err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable store for the task sequence and the theme preference.
pub trait TaskStorage {
    /// Reads the persisted task sequence.
    ///
    /// Absent key and undecodable payload both yield `Ok(None)`; the session
    /// starts empty in either case.
    fn load(&self) -> StorageResult<Option<Vec<Task>>>;

    /// Durably replaces the persisted task sequence.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;

    /// Reads the persisted theme preference; unknown tokens yield `Ok(None)`.
    fn load_theme(&self) -> StorageResult<Option<Theme>>;

    /// Durably replaces the persisted theme preference.
    fn save_theme(&self, theme: Theme) -> StorageResult<()>;
}

impl<T: TaskStorage + ?Sized> TaskStorage for &T {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        (**self).save(tasks)
    }

    fn load_theme(&self) -> StorageResult<Option<Theme>> {
        (**self).load_theme()
    }

    fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        (**self).save_theme(theme)
    }
}
