//! Persistence adapter for the task list and the selected filter.
//!
//! # Responsibility
//! - Serialize the full task list into one entry and read it back.
//! - Persist the selected filter independently of the task list.
//!
//! # Invariants
//! - `load_tasks` never fails: absent or malformed payloads yield an empty
//!   list, malformed elements are skipped one by one.
//! - `load_filter` only ever returns a member of the closed filter set.
//! - Backend errors are logged and absorbed here.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};
use crate::store::kv::KeyValueStore;
use log::{error, info, warn};
use serde_json::Value;

/// Entry holding the serialized task list.
pub const TASKS_KEY: &str = "simpleTodoTasks";
/// Entry holding the selected filter.
pub const FILTER_KEY: &str = "simpleTodoFilter";

/// Task-list and filter persistence over any [`KeyValueStore`].
pub struct TodoStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TodoStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the full task list in stored order.
    pub fn load_tasks(&self) -> Vec<Task> {
        let raw = match self.store.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(
                    "event=tasks_load module=store status=error error_code=store_read_failed error={err}"
                );
                return Vec::new();
            }
        };
        decode_tasks(&raw)
    }

    /// Overwrites the stored task list with `tasks`.
    pub fn save_tasks(&self, tasks: &[Task]) {
        let json = match serde_json::to_string(tasks) {
            Ok(json) => json,
            Err(err) => {
                error!(
                    "event=tasks_save module=store status=error error_code=serialize_failed error={err}"
                );
                return;
            }
        };
        if let Err(err) = self.store.set(TASKS_KEY, &json) {
            error!(
                "event=tasks_save module=store status=error error_code=store_write_failed count={} error={err}",
                tasks.len()
            );
        }
    }

    /// Loads the selected filter, `All` when absent or unrecognized.
    pub fn load_filter(&self) -> Filter {
        match self.store.get(FILTER_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "event=filter_load module=store status=fallback reason=unknown_value fallback=all"
                );
                Filter::All
            }),
            Ok(None) => Filter::All,
            Err(err) => {
                error!(
                    "event=filter_load module=store status=error error_code=store_read_failed error={err}"
                );
                Filter::All
            }
        }
    }

    pub fn save_filter(&self, filter: Filter) {
        if let Err(err) = self.store.set(FILTER_KEY, filter.as_str()) {
            error!(
                "event=filter_save module=store status=error error_code=store_write_failed filter={filter} error={err}"
            );
        }
    }
}

/// Decodes a stored task-list payload.
///
/// The top level must be a JSON array. Each element must be an object with
/// string `id` and `text`; `completed` defaults to `false` unless it is a
/// boolean. Extra fields are ignored.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("event=tasks_load module=store status=fallback reason=not_an_array fallback=empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=tasks_load module=store status=fallback reason=parse_failed fallback=empty error={err}"
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let tasks = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let task = decode_task(item);
            if task.is_none() {
                warn!("event=tasks_load module=store status=skip reason=malformed_entry index={index}");
            }
            task
        })
        .collect::<Vec<_>>();

    if tasks.len() != total {
        info!(
            "event=tasks_load module=store status=partial loaded={} skipped={}",
            tasks.len(),
            total - tasks.len()
        );
    }
    tasks
}

fn decode_task(item: &Value) -> Option<Task> {
    let object = item.as_object()?;
    let id = object.get("id")?.as_str()?;
    let text = object.get("text")?.as_str()?;
    let completed = object
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Some(Task::with_id(TaskId::new(id), text, completed))
}

#[cfg(test)]
mod tests {
    use super::{decode_tasks, TodoStorage, FILTER_KEY, TASKS_KEY};
    use crate::model::filter::Filter;
    use crate::model::task::{Task, TaskId};
    use crate::db::DbError;
    use crate::render::{ListView, Surface};
    use crate::service::todo_service::TodoService;
    use crate::store::kv::{KeyValueStore, MemoryKvStore, StoreError, StoreResult};

    /// Backend whose every call fails.
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)))
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)))
        }
    }

    #[derive(Default)]
    struct LastView(Option<ListView>);

    impl Surface for LastView {
        fn present(&mut self, view: &ListView) {
            self.0 = Some(view.clone());
        }
    }

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task::with_id(TaskId::from(id), text, completed)
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = TodoStorage::new(MemoryKvStore::new());
        let tasks = vec![task("1", "a", false), task("2", "b", true)];

        storage.save_tasks(&tasks);
        assert_eq!(storage.load_tasks(), tasks);

        storage.save_tasks(&[]);
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn missing_entry_loads_empty() {
        let storage = TodoStorage::new(MemoryKvStore::new());
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn non_json_payload_loads_empty() {
        let store = MemoryKvStore::new();
        store.set(TASKS_KEY, "{not json").unwrap();
        assert!(TodoStorage::new(store).load_tasks().is_empty());
    }

    #[test]
    fn non_array_payload_loads_empty() {
        assert!(decode_tasks(r#"{"id":"1","text":"a"}"#).is_empty());
        assert!(decode_tasks("42").is_empty());
        assert!(decode_tasks("null").is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped_individually() {
        let raw = r#"[
            {"id":"1","text":"keep","completed":true},
            {"id":2,"text":"numeric id"},
            {"text":"no id"},
            {"id":"3"},
            "string entry",
            {"id":"4","text":"no flag"},
            {"id":"5","text":"odd flag","completed":"yes","extra":1}
        ]"#;
        let tasks = decode_tasks(raw);
        assert_eq!(
            tasks,
            vec![
                task("1", "keep", true),
                task("4", "no flag", false),
                task("5", "odd flag", false),
            ]
        );
    }

    #[test]
    fn filter_defaults_to_all_and_round_trips() {
        let storage = TodoStorage::new(MemoryKvStore::new());
        assert_eq!(storage.load_filter(), Filter::All);

        storage.save_filter(Filter::Completed);
        assert_eq!(storage.load_filter(), Filter::Completed);
        assert_eq!(
            storage.store().get(FILTER_KEY).unwrap().as_deref(),
            Some("completed")
        );
    }

    #[test]
    fn unknown_stored_filter_falls_back_to_all() {
        let store = MemoryKvStore::new();
        store.set(FILTER_KEY, "someday").unwrap();
        assert_eq!(TodoStorage::new(store).load_filter(), Filter::All);
    }

    #[test]
    fn failed_reads_count_as_absent() {
        let storage = TodoStorage::new(FailingStore);
        assert!(storage.load_tasks().is_empty());
        assert_eq!(storage.load_filter(), Filter::All);
    }

    #[test]
    fn failed_writes_are_dropped() {
        let storage = TodoStorage::new(FailingStore);
        storage.save_tasks(&[task("1", "a", false)]);
        storage.save_filter(Filter::Active);
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn handlers_keep_presenting_over_a_failing_backend() {
        let mut service = TodoService::new(FailingStore, LastView::default());
        assert_eq!(service.filter(), Filter::All);

        service.add("still shown");
        let view = service.surface().0.as_ref().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].text, "still shown");

        service.set_filter(Filter::Completed);
        let view = service.surface().0.as_ref().unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.active_filter, Filter::Completed);
    }
}
