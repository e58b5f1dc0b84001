//! SQLite-backed storage collaborator.
//!
//! # Responsibility
//! - Serialize the task sequence to JSON and keep it under its versioned
//!   key in the `kv_store` table.
//! - Decode persisted payloads defensively on the way back in.
//!
//! # Invariants
//! - One key carries one whole payload; saves replace, never append.
//! - Undecodable payloads are logged and reported as absent data.

use crate::model::task::Task;
use crate::model::theme::Theme;
use crate::storage::{StorageResult, TaskStorage, TASKS_KEY, THEME_KEY};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

/// Storage collaborator over an already-bootstrapped connection (see
/// [`crate::db::open_db`]).
pub struct SqliteTaskStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_value(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

impl TaskStorage for SqliteTaskStorage<'_> {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        let Some(raw) = self.read_value(TASKS_KEY)? else {
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
        let payload = serde_json::to_string(tasks)?;
        self.write_value(TASKS_KEY, &payload)
    }

    fn load_theme(&self) -> StorageResult<Option<Theme>> {
        let Some(raw) = self.read_value(THEME_KEY)? else {
            return Ok(None);
        };

        let theme = Theme::parse(&raw);
        if theme.is_none() {
            warn!(
                "event=storage_load module=storage status=malformed key={THEME_KEY} value={raw}"
            );
        }
        Ok(theme)
    }

    fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.write_value(THEME_KEY, theme.as_str())
    }
}
