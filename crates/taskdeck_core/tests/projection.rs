use taskdeck_core::{
    project, Command, FixedClock, SequentialIds, StatusCounts, StatusFilter, Task, TaskQuery,
    TaskStatus, TaskStore,
};

/// The two-task fixture: "Buy milk" pending, "Walk dog" completed.
fn fixture() -> Vec<Task> {
    let store = TaskStore::new(FixedClock(1_700_000_000_000), SequentialIds::new());
    let mut tasks = store.apply(
        &[],
        Command::Create {
            title: "Walk dog".into(),
            description: None,
        },
    );
    tasks = store.apply(
        &tasks,
        Command::Create {
            title: "Buy milk".into(),
            description: None,
        },
    );
    let walk_dog = tasks[1].id;
    store.apply(
        &tasks,
        Command::SetStatus {
            id: walk_dog,
            status: TaskStatus::Completed,
        },
    )
}

fn expected_counts() -> StatusCounts {
    StatusCounts {
        all: 2,
        pending: 1,
        in_progress: 0,
        completed: 1,
    }
}

#[test]
fn text_search_filters_by_substring() {
    let tasks = fixture();
    let view = project(&tasks, &TaskQuery::new("milk", StatusFilter::All));

    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].title, "Buy milk");
    assert_eq!(view.counts, expected_counts());
}

#[test]
fn status_filter_selects_by_exact_status() {
    let tasks = fixture();
    let view = project(&tasks, &TaskQuery::new("", StatusFilter::Completed));

    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].title, "Walk dog");
    assert_eq!(view.counts, expected_counts());
}

#[test]
fn search_is_case_insensitive() {
    let tasks = fixture();

    for needle in ["MILK", "Milk", "mIlK"] {
        let view = project(&tasks, &TaskQuery::new(needle, StatusFilter::All));
        assert_eq!(view.visible.len(), 1, "needle `{needle}` should match");
    }
}

#[test]
fn whitespace_only_search_matches_everything() {
    let tasks = fixture();

    for search in ["", "   ", "\t"] {
        let view = project(&tasks, &TaskQuery::new(search, StatusFilter::All));
        assert_eq!(view.visible.len(), 2);
    }
}

#[test]
fn search_also_matches_descriptions() {
    let store = TaskStore::new(FixedClock(1), SequentialIds::new());
    let tasks = store.apply(
        &[],
        Command::Create {
            title: "errands".into(),
            description: Some("pick up dry cleaning".into()),
        },
    );

    let view = project(&tasks, &TaskQuery::new("cleaning", StatusFilter::All));
    assert_eq!(view.visible.len(), 1);
}

#[test]
fn projection_preserves_collection_order() {
    let store = TaskStore::new(FixedClock(1), SequentialIds::new());
    let mut tasks = Vec::new();
    for title in ["task five", "task four", "task three", "task two", "task one"] {
        tasks = store.apply(
            &tasks,
            Command::Create {
                title: title.into(),
                description: None,
            },
        );
    }

    let view = project(&tasks, &TaskQuery::new("task", StatusFilter::All));
    let visible: Vec<_> = view.visible.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(
        visible,
        ["task one", "task two", "task three", "task four", "task five"]
    );
}

#[test]
fn no_match_yields_empty_view_with_global_counts() {
    let tasks = fixture();
    let view = project(&tasks, &TaskQuery::new("zettelkasten", StatusFilter::All));

    assert!(view.visible.is_empty());
    assert_eq!(view.counts, expected_counts());
}
