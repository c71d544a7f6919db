use simpletodo_core::{
    Filter, KeyValueStore, ListView, MemoryKvStore, SqliteKvStore, Surface, Task, TaskId,
    TodoService, TASKS_KEY,
};

#[derive(Default)]
struct Recorder {
    views: Vec<ListView>,
}

impl Surface for Recorder {
    fn present(&mut self, view: &ListView) {
        self.views.push(view.clone());
    }
}

fn seeded(store: &MemoryKvStore, tasks: &[Task]) {
    store
        .set(TASKS_KEY, &serde_json::to_string(tasks).unwrap())
        .unwrap();
}

fn task(id: &str, text: &str, completed: bool) -> Task {
    Task::with_id(TaskId::from(id), text, completed)
}

#[test]
fn add_on_empty_list_creates_single_active_task() {
    let mut service = TodoService::new(MemoryKvStore::new(), Recorder::default());
    service.add("buy milk");

    let tasks = service.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "buy milk");
    assert!(!tasks[0].completed);
    assert!(!tasks[0].id().as_str().is_empty());
}

#[test]
fn add_blank_text_leaves_list_unchanged() {
    let store = MemoryKvStore::new();
    seeded(&store, &[task("1", "a", false)]);
    let mut service = TodoService::new(&store, Recorder::default());

    service.add("  ");
    service.add("");
    assert_eq!(service.tasks(), vec![task("1", "a", false)]);
}

#[test]
fn added_ids_are_unique() {
    let mut service = TodoService::new(MemoryKvStore::new(), Recorder::default());
    for text in ["one", "two", "three", "four"] {
        service.add(text);
    }
    let mut ids = service
        .tasks()
        .iter()
        .map(|task| task.id().clone())
        .collect::<Vec<_>>();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn toggle_twice_restores_original_state() {
    let store = MemoryKvStore::new();
    let original = vec![task("1", "a", false), task("2", "b", true)];
    seeded(&store, &original);
    let mut service = TodoService::new(&store, Recorder::default());

    service.toggle(&TaskId::from("2"));
    assert!(!service.tasks()[1].completed);
    service.toggle(&TaskId::from("2"));
    assert_eq!(service.tasks(), original);
}

#[test]
fn toggle_missing_id_is_noop() {
    let store = MemoryKvStore::new();
    let original = vec![task("1", "a", false)];
    seeded(&store, &original);
    let mut service = TodoService::new(&store, Recorder::default());

    service.toggle(&TaskId::from("nope"));
    assert_eq!(service.tasks(), original);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let store = MemoryKvStore::new();
    seeded(
        &store,
        &[task("1", "a", false), task("2", "b", true), task("3", "c", false)],
    );
    let mut service = TodoService::new(&store, Recorder::default());

    service.delete(&TaskId::from("2"));
    assert_eq!(
        service.tasks(),
        vec![task("1", "a", false), task("3", "c", false)]
    );

    service.delete(&TaskId::from("missing"));
    assert_eq!(service.tasks().len(), 2);
}

#[test]
fn clear_completed_keeps_active_tasks_in_order() {
    let store = MemoryKvStore::new();
    seeded(
        &store,
        &[
            task("1", "a", true),
            task("2", "b", false),
            task("3", "c", true),
            task("4", "d", false),
        ],
    );
    let mut service = TodoService::new(&store, Recorder::default());

    service.clear_completed();
    assert_eq!(
        service.tasks(),
        vec![task("2", "b", false), task("4", "d", false)]
    );
    let last = service.surface().views.last().unwrap();
    assert!(!last.has_completed);
    assert_eq!(last.items_left, 2);
}

#[test]
fn filter_selection_drives_rows_but_not_counter() {
    let store = MemoryKvStore::new();
    seeded(&store, &[task("A", "a", false), task("B", "b", true)]);
    let mut service = TodoService::new(&store, Recorder::default());

    let expectations = [
        (Filter::Active, vec!["A"]),
        (Filter::Completed, vec!["B"]),
        (Filter::All, vec!["A", "B"]),
    ];
    for (filter, expected) in expectations {
        service.set_filter(filter);
        let view = service.surface().views.last().unwrap();
        let ids = view
            .rows
            .iter()
            .map(|row| row.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, expected);
        assert_eq!(view.items_left, 1);
    }
}

#[test]
fn filter_survives_a_new_session() {
    let store = MemoryKvStore::new();
    {
        let mut first = TodoService::new(&store, Recorder::default());
        first.set_filter(Filter::Completed);
    }
    let second = TodoService::new(&store, Recorder::default());
    assert_eq!(second.filter(), Filter::Completed);
}

#[test]
fn corrupted_task_entry_behaves_as_empty_list() {
    let store = MemoryKvStore::new();
    store.set(TASKS_KEY, "<<definitely not json>>").unwrap();
    let mut service = TodoService::new(&store, Recorder::default());

    assert!(service.tasks().is_empty());
    service.add("fresh start");
    assert_eq!(service.tasks().len(), 1);
}

#[test]
fn tasks_persist_in_sqlite_file_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.sqlite3");

    {
        let mut service = TodoService::new(SqliteKvStore::open(&path).unwrap(), Recorder::default());
        service.add("write report");
        service.add("call mom");
        let first = service.tasks()[0].id().clone();
        service.toggle(&first);
        service.set_filter(Filter::Active);
    }

    let mut service = TodoService::new(SqliteKvStore::open(&path).unwrap(), Recorder::default());
    assert_eq!(service.filter(), Filter::Active);
    let tasks = service.tasks();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].completed);
    assert_eq!(tasks[1].text, "call mom");

    service.refresh();
    let view = service.surface().views.last().unwrap();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].text, "call mom");
}
