//! Core domain logic for SimpleTodo.
//! This crate is the single source of truth for task-list invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod state;
pub mod store;
pub mod service;
pub mod wiring;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{Filter, ParseFilterError};
pub use model::task::{Task, TaskId};
pub use render::{render, FilterControl, ListView, Surface, TaskRow};
pub use service::todo_service::TodoService;
pub use state::FilterState;
pub use store::kv::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};
pub use store::todo_storage::{TodoStorage, FILTER_KEY, TASKS_KEY};
pub use wiring::{ClickTarget, EventOutcome, EventWiring, Key, RowElement, UiEvent};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
