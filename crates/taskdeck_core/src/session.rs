//! Session shell: owns the single state root.
//!
//! # Responsibility
//! - Hold the authoritative task collection and theme for one application
//!   session, and thread every mutation through the store.
//! - Wire the persistence collaborator in: rehydrate once at startup, then
//!   save after every accepted command.
//!
//! # Invariants
//! - Saves are gated on completed rehydration, so startup can never
//!   overwrite persisted data with the empty initial state.
//! - A failed save is logged and dropped; in-memory state remains the
//!   source of truth and the write is not retried.
//! - State is replaced wholesale on every command, never mutated in place.

use crate::clock::Clock;
use crate::ids::IdGenerator;
use crate::model::task::Task;
use crate::model::theme::Theme;
use crate::storage::TaskStorage;
use crate::store::command::Command;
use crate::store::task_store::TaskStore;
use log::{info, warn};

/// One running application session.
pub struct TaskSession<S: TaskStorage, C: Clock, G: IdGenerator> {
    storage: S,
    store: TaskStore<C, G>,
    tasks: Vec<Task>,
    theme: Theme,
    hydrated: bool,
}

impl<S: TaskStorage, C: Clock, G: IdGenerator> TaskSession<S, C, G> {
    /// Creates a session with an empty collection. Call [`Self::hydrate`]
    /// before dispatching so persisted state is restored first.
    pub fn new(storage: S, store: TaskStore<C, G>) -> Self {
        Self {
            storage,
            store,
            tasks: Vec::new(),
            theme: Theme::default(),
            hydrated: false,
        }
    }

    /// Restores persisted state and opens the save gate. Idempotent.
    ///
    /// Load failures are logged and read as "no data": startup never fails
    /// because of what is on disk.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        match self.storage.load() {
            Ok(Some(tasks)) => {
                info!(
                    "event=session_hydrate module=session status=ok count={}",
                    tasks.len()
                );
                self.tasks = self.store.apply(&self.tasks, Command::Rehydrate(tasks));
            }
            Ok(None) => {
                info!("event=session_hydrate module=session status=empty");
            }
            Err(err) => {
                warn!("event=session_hydrate module=session status=error error={err}");
            }
        }

        match self.storage.load_theme() {
            Ok(Some(theme)) => self.theme = theme,
            Ok(None) => {}
            Err(err) => {
                warn!("event=session_hydrate module=session status=theme_error error={err}");
            }
        }

        self.hydrated = true;
    }

    /// Applies one command and persists the result.
    ///
    /// Returns the new authoritative state. The save is fire-and-forget: a
    /// transport failure leaves in-memory state untouched.
    pub fn dispatch(&mut self, command: Command) -> &[Task] {
        let kind = command.kind();
        self.tasks = self.store.apply(&self.tasks, command);
        info!(
            "event=dispatch module=session kind={kind} count={}",
            self.tasks.len()
        );

        if self.hydrated {
            if let Err(err) = self.storage.save(&self.tasks) {
                warn!("event=storage_save module=session status=error kind={kind} error={err}");
            }
        }

        &self.tasks
    }

    /// Flips the theme and persists the preference immediately.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.storage.save_theme(self.theme) {
            warn!("event=storage_save module=session status=error kind=theme error={err}");
        }
        self.theme
    }

    /// Current authoritative task collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current theme preference.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether startup rehydration has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }
}
