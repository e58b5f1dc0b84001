use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{SqliteTaskStorage, Task, TaskStatus, TaskStorage, Theme};
use uuid::Uuid;

fn sample_tasks() -> Vec<Task> {
    let mut walk = Task::new(
        Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        "Walk dog",
        "",
        1_700_000_000_000,
    );
    walk.status = TaskStatus::Completed;
    walk.updated_at_ms = 1_700_000_120_000;

    let buy = Task::new(
        Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
        "Buy milk",
        "2 liters",
        1_700_000_060_000,
    );

    vec![buy, walk]
}

#[test]
fn save_then_load_reproduces_the_sequence_field_for_field() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);
    let tasks = sample_tasks();

    storage.save(&tasks).unwrap();
    let loaded = storage.load().unwrap().unwrap();

    assert_eq!(loaded, tasks);
}

#[test]
fn fresh_store_has_no_data() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);

    assert!(storage.load().unwrap().is_none());
    assert!(storage.load_theme().unwrap().is_none());
}

#[test]
fn empty_sequence_round_trips_as_present_data() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);

    storage.save(&[]).unwrap();

    // An explicitly saved empty deck is data, not absence.
    assert_eq!(storage.load().unwrap(), Some(Vec::new()));
}

#[test]
fn save_replaces_the_previous_payload() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);
    let tasks = sample_tasks();

    storage.save(&tasks).unwrap();
    storage.save(&tasks[..1]).unwrap();

    let loaded = storage.load().unwrap().unwrap();
    assert_eq!(loaded.as_slice(), &tasks[..1]);
}

#[test]
fn malformed_payload_reads_as_absent_data() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);

    for garbage in ["not json at all", "{\"an\": \"object\"}", "[{\"id\": 5}]"] {
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES ('taskdeck.tasks.v1', ?1)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [garbage],
        )
        .unwrap();

        assert!(storage.load().unwrap().is_none(), "payload `{garbage}`");
    }
}

#[test]
fn tasks_are_stored_under_the_versioned_key() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);

    storage.save(&sample_tasks()).unwrap();

    let keys: Vec<String> = conn
        .prepare("SELECT key FROM kv_store ORDER BY key;")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(keys, ["taskdeck.tasks.v1"]);
}

#[test]
fn wire_payload_uses_original_field_names() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);

    storage.save(&sample_tasks()).unwrap();

    let raw: String = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = 'taskdeck.tasks.v1';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json[0]["title"], "Buy milk");
    assert_eq!(json[0]["status"], "pending");
    assert!(json[0]["createdAt"].is_i64());
    assert!(json[0]["updatedAt"].is_i64());
    assert_eq!(json[1]["status"], "completed");
}

#[test]
fn theme_round_trips_and_rejects_unknown_tokens() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::new(&conn);

    storage.save_theme(Theme::Dark).unwrap();
    assert_eq!(storage.load_theme().unwrap(), Some(Theme::Dark));

    conn.execute(
        "UPDATE kv_store SET value = 'sepia' WHERE key = 'taskdeck.theme.v1';",
        [],
    )
    .unwrap();
    assert!(storage.load_theme().unwrap().is_none());
}
