//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` wiring end to
//!   end: open a store, run a session, project a view.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{
    project, Command, SqliteTaskStorage, TaskQuery, TaskSession, TaskStatus, TaskStore,
};

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open store: {err}");
            std::process::exit(1);
        }
    };

    let mut session = TaskSession::new(SqliteTaskStorage::new(&conn), TaskStore::system());
    session.hydrate();

    session.dispatch(Command::Create {
        title: "walk the dog".into(),
        description: None,
    });
    session.dispatch(Command::Create {
        title: "buy milk".into(),
        description: Some("2 liters".into()),
    });
    let newest = session.tasks()[0].id;
    session.dispatch(Command::SetStatus {
        id: newest,
        status: TaskStatus::InProgress,
    });

    let view = project(session.tasks(), &TaskQuery::default());
    println!(
        "tasks={} pending={} in-progress={} completed={}",
        view.counts.all, view.counts.pending, view.counts.in_progress, view.counts.completed
    );
    for task in view.visible {
        println!("[{}] {}", task.status.as_str(), task.title);
    }
}
