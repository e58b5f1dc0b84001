//! In-memory storage collaborator.
//!
//! Keeps the same JSON payload encoding as the SQLite implementation so
//! tests exercise the real round-trip path, and adds a failure toggle for
//! exercising the fire-and-forget save contract.

use crate::model::task::Task;
use crate::model::theme::Theme;
use crate::storage::{StorageError, StorageResult, TaskStorage, TASKS_KEY};
use log::warn;
use std::cell::{Cell, RefCell};

/// Storage collaborator for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTaskStorage {
    tasks: RefCell<Option<String>>,
    theme: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
}

impl MemoryTaskStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail, simulating a broken backend.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Seeds the raw task payload, bypassing serialization. Lets tests plant
    /// malformed data the way a hand-edited store file would.
    pub fn seed_raw_tasks(&self, payload: impl Into<String>) {
        *self.tasks.borrow_mut() = Some(payload.into());
    }

    /// Raw persisted task payload, if any.
    pub fn raw_tasks(&self) -> Option<String> {
        self.tasks.borrow().clone()
    }

    fn guard_save(&self) -> StorageResult<()> {
        if self.fail_saves.get() {
            Err(StorageError::Unavailable("saves disabled"))
        } else {
            Ok(())
        }
    }
}

impl TaskStorage for MemoryTaskStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        let Some(raw) = self.tasks.borrow().clone() else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => Ok(Some(tasks)),
            Err(err) => {
                warn!(
                    "event=storage_load module=storage status=malformed key={TASKS_KEY} error={err}"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        self.guard_save()?;
        *self.tasks.borrow_mut() = Some(serde_json::to_string(tasks)?);
        Ok(())
    }

    fn load_theme(&self) -> StorageResult<Option<Theme>> {
        Ok(self.theme.borrow().as_deref().and_then(Theme::parse))
    }

    fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.guard_save()?;
        *self.theme.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}
