use taskdeck_core::{
    Command, DragGesture, FixedClock, SequentialIds, Task, TaskStore,
};
use uuid::Uuid;

fn store() -> TaskStore<FixedClock, SequentialIds> {
    TaskStore::new(FixedClock(1_700_000_000_000), SequentialIds::new())
}

/// Collection [A, B, C] in display order.
fn abc(store: &TaskStore<FixedClock, SequentialIds>) -> Vec<Task> {
    let mut tasks = Vec::new();
    for title in ["C", "B", "A"] {
        tasks = store.apply(
            &tasks,
            Command::Create {
                title: title.into(),
                description: None,
            },
        );
    }
    tasks
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn dragging_b_onto_a_moves_b_before_a() {
    let store = store();
    let tasks = abc(&store);
    assert_eq!(titles(&tasks), ["A", "B", "C"]);

    let mut gesture = DragGesture::new();
    gesture.drag_start(tasks[1].id);
    gesture.drag_over(tasks[0].id);
    let command = gesture.drop_on(tasks[0].id, &tasks).expect("drop resolves");

    let reordered = store.apply(&tasks, command);
    assert_eq!(titles(&reordered), ["B", "A", "C"]);
    assert_eq!(gesture, DragGesture::Idle);
}

#[test]
fn dropping_on_the_drag_source_changes_nothing() {
    let store = store();
    let tasks = abc(&store);

    let mut gesture = DragGesture::new();
    gesture.drag_start(tasks[1].id);
    assert_eq!(gesture.drop_on(tasks[1].id, &tasks), None);
    assert_eq!(gesture, DragGesture::Idle);
}

#[test]
fn drop_with_a_source_deleted_mid_gesture_is_inert() {
    let store = store();
    let tasks = abc(&store);

    let mut gesture = DragGesture::new();
    gesture.drag_start(tasks[1].id);
    let shrunk = store.apply(&tasks, Command::Delete { id: tasks[1].id });

    assert_eq!(gesture.drop_on(tasks[0].id, &shrunk), None);
    assert_eq!(gesture, DragGesture::Idle);
}

#[test]
fn drop_on_an_unknown_target_is_inert() {
    let store = store();
    let tasks = abc(&store);

    let mut gesture = DragGesture::new();
    gesture.drag_start(tasks[0].id);
    assert_eq!(gesture.drop_on(Uuid::from_u128(0xabad), &tasks), None);
    assert_eq!(gesture, DragGesture::Idle);
}

#[test]
fn a_gesture_yields_at_most_one_reorder() {
    let store = store();
    let tasks = abc(&store);

    let mut gesture = DragGesture::new();
    gesture.drag_start(tasks[2].id);
    assert!(gesture.drop_on(tasks[0].id, &tasks).is_some());
    // Already idle: a stray second drop must not produce another command.
    assert_eq!(gesture.drop_on(tasks[0].id, &tasks), None);
}

#[test]
fn drag_end_cancels_without_a_command() {
    let store = store();
    let tasks = abc(&store);

    let mut gesture = DragGesture::new();
    gesture.drag_start(tasks[0].id);
    gesture.drag_over(tasks[2].id);
    gesture.drag_end();

    assert_eq!(gesture, DragGesture::Idle);
    assert_eq!(gesture.drop_on(tasks[2].id, &tasks), None);
}
