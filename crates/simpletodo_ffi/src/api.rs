//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose todo commands to Dart via FRB, each returning the view to draw.
//! - Keep error semantics simple: an `ok` flag and a message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call opens storage, runs one command and closes it again, so the
//!   Dart side never holds state beyond the returned view.

use log::warn;
use simpletodo_core::config::DB_PATH_ENV;
use simpletodo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Filter, ListView, SqliteKvStore, Surface, TaskId, TodoService,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const FFI_DB_FILE_NAME: &str = "simpletodo_ffi.sqlite3";
static FFI_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: trace|debug|info|warn|error, case-insensitive.
/// - `log_dir`: absolute directory for rolling logs.
/// - Returns empty string on success, error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Everything the Dart list screen draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub rows: Vec<TodoRow>,
    pub items_left: u32,
    /// Ready-made counter text, e.g. `2 items left`.
    pub items_left_label: String,
    /// `all|active|completed`; the control to highlight.
    pub active_filter: String,
    /// Whether to show the clear-completed control.
    pub has_completed: bool,
}

/// Response envelope for every todo call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoViewResponse {
    pub ok: bool,
    pub view: Option<TodoView>,
    pub message: String,
}

/// Current list under the persisted filter.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_view() -> TodoViewResponse {
    execute(&resolve_db_path(), Command::View)
}

/// Adds a task from the new-task input; blank text changes nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> TodoViewResponse {
    execute(&resolve_db_path(), Command::Add(text))
}

/// Flips completion of the task with `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) -> TodoViewResponse {
    execute(&resolve_db_path(), Command::Toggle(TaskId::new(id)))
}

/// Deletes the task with `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoViewResponse {
    execute(&resolve_db_path(), Command::Delete(TaskId::new(id)))
}

/// Removes all completed tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_clear_completed() -> TodoViewResponse {
    execute(&resolve_db_path(), Command::ClearCompleted)
}

/// Selects `all|active|completed`; other values are rejected with `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_set_filter(filter: String) -> TodoViewResponse {
    match filter.parse::<Filter>() {
        Ok(filter) => execute(&resolve_db_path(), Command::SetFilter(filter)),
        Err(err) => TodoViewResponse {
            ok: false,
            view: None,
            message: format!("todo_set_filter failed: {err}"),
        },
    }
}

#[derive(Debug)]
enum Command {
    View,
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    ClearCompleted,
    SetFilter(Filter),
}

/// Keeps the last view a command presented.
#[derive(Default)]
struct ViewCapture {
    last: Option<ListView>,
}

impl Surface for ViewCapture {
    fn present(&mut self, view: &ListView) {
        self.last = Some(view.clone());
    }
}

fn execute(db_path: &Path, command: Command) -> TodoViewResponse {
    let store = match SqliteKvStore::open(db_path) {
        Ok(store) => store,
        Err(err) => {
            warn!("event=ffi_command module=ffi status=error error_code=db_open_failed error={err}");
            return TodoViewResponse {
                ok: false,
                view: None,
                message: format!("todo storage open failed: {err}"),
            };
        }
    };

    let mut service = TodoService::new(store, ViewCapture::default());
    match command {
        Command::View => service.refresh(),
        Command::Add(text) => service.add(&text),
        Command::Toggle(id) => service.toggle(&id),
        Command::Delete(id) => service.delete(&id),
        Command::ClearCompleted => service.clear_completed(),
        Command::SetFilter(filter) => service.set_filter(filter),
    }

    let view = match service.surface_mut().last.take() {
        Some(view) => view,
        None => service.view(),
    };
    TodoViewResponse {
        ok: true,
        message: view.items_left_label.clone(),
        view: Some(to_todo_view(view)),
    }
}

fn to_todo_view(view: ListView) -> TodoView {
    TodoView {
        rows: view
            .rows
            .into_iter()
            .map(|row| TodoRow {
                id: row.id.to_string(),
                text: row.text,
                completed: row.completed,
            })
            .collect(),
        items_left: u32::try_from(view.items_left).unwrap_or(u32::MAX),
        items_left_label: view.items_left_label,
        active_filter: view.active_filter.as_str().to_string(),
        has_completed: view.has_completed,
    }
}

fn resolve_db_path() -> PathBuf {
    FFI_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(FFI_DB_FILE_NAME)
        })
        .clone()
}
