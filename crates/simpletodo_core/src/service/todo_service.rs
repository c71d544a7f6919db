//! Todo command handlers.
//!
//! # Responsibility
//! - Provide add, toggle, delete, clear-completed and set-filter entry points.
//! - Present a fresh [`ListView`] after every handled command.
//!
//! # Invariants
//! - Every mutation reloads the full list from storage, applies one change,
//!   writes the full list back and renders the written list.
//! - No task list is cached between calls; only the filter is held.
//! - Handlers never report failure to callers.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};
use crate::render::{render, ListView, Surface};
use crate::state::FilterState;
use crate::store::kv::KeyValueStore;
use crate::store::todo_storage::TodoStorage;
use log::{debug, info};

/// Command handlers over one store and one surface.
pub struct TodoService<S: KeyValueStore, U: Surface> {
    storage: TodoStorage<S>,
    filter: FilterState,
    surface: U,
}

impl<S: KeyValueStore, U: Surface> TodoService<S, U> {
    /// Creates handlers with the filter restored from `store`.
    ///
    /// Nothing is presented until the first command or [`Self::refresh`].
    pub fn new(store: S, surface: U) -> Self {
        let storage = TodoStorage::new(store);
        let filter = FilterState::new(storage.load_filter());
        debug!(
            "event=service_init module=service status=ok filter={}",
            filter.get()
        );
        Self {
            storage,
            filter,
            surface,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter.get()
    }

    /// Reads the current task list straight from storage.
    pub fn tasks(&self) -> Vec<Task> {
        self.storage.load_tasks()
    }

    pub fn storage(&self) -> &TodoStorage<S> {
        &self.storage
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// Builds the view for the stored list without changing anything.
    pub fn view(&self) -> ListView {
        render(&self.storage.load_tasks(), self.filter.get())
    }

    /// Renders the stored list without mutating it.
    pub fn refresh(&mut self) {
        let tasks = self.storage.load_tasks();
        self.present(&tasks);
    }

    /// Appends a task; blank text is ignored.
    pub fn add(&mut self, text: &str) {
        let mut tasks = self.storage.load_tasks();
        let Some(task) = Task::create(text, &tasks) else {
            debug!("event=task_add module=service status=skip reason=blank_text");
            return;
        };
        info!(
            "event=task_add module=service status=ok id={} count={}",
            task.id(),
            tasks.len() + 1
        );
        tasks.push(task);
        self.commit(&tasks);
    }

    /// Flips completion of the task with `id`; unknown ids are ignored.
    pub fn toggle(&mut self, id: &TaskId) {
        let mut tasks = self.storage.load_tasks();
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("event=task_toggle module=service status=skip reason=not_found id={id}");
            return;
        };
        task.toggle();
        info!(
            "event=task_toggle module=service status=ok id={id} completed={}",
            task.completed
        );
        self.commit(&tasks);
    }

    /// Removes the task with `id` if present.
    pub fn delete(&mut self, id: &TaskId) {
        let mut tasks = self.storage.load_tasks();
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        info!(
            "event=task_delete module=service status=ok id={id} removed={}",
            before - tasks.len()
        );
        self.commit(&tasks);
    }

    /// Removes every completed task.
    pub fn clear_completed(&mut self) {
        let mut tasks = self.storage.load_tasks();
        let before = tasks.len();
        tasks.retain(Task::is_active);
        info!(
            "event=clear_completed module=service status=ok removed={} remaining={}",
            before - tasks.len(),
            tasks.len()
        );
        self.commit(&tasks);
    }

    /// Selects and persists `filter`, then re-renders the stored list.
    pub fn set_filter(&mut self, filter: Filter) {
        let previous = self.filter.set(filter);
        self.storage.save_filter(filter);
        info!("event=filter_set module=service status=ok from={previous} to={filter}");
        self.refresh();
    }

    fn commit(&mut self, tasks: &[Task]) {
        self.storage.save_tasks(tasks);
        self.present(tasks);
    }

    fn present(&mut self, tasks: &[Task]) {
        let view = render(tasks, self.filter.get());
        self.surface.present(&view);
    }
}
