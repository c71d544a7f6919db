//! Task domain model.
//!
//! # Responsibility
//! - Define the single todo entry shared by storage, renderer and handlers.
//! - Generate creation-time ids.
//!
//! # Invariants
//! - `id` is assigned once at creation and has no setter.
//! - `text` is trimmed and non-empty for tasks created through [`Task::create`].

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier of a task within one list.
///
/// Ids are decimal epoch-millisecond strings for generated tasks, but any
/// string read back from storage is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing id string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id for a task appended to `existing`.
    ///
    /// Uses the current epoch milliseconds, bumped past the largest numeric
    /// id already in the list so two adds within one millisecond stay unique.
    pub fn generate(existing: &[Task]) -> Self {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        let next_after_existing = existing
            .iter()
            .filter_map(|task| task.id.0.parse::<u64>().ok())
            .max()
            .map_or(0, |max| max.saturating_add(1));
        Self(now_ms.max(next_after_existing).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One todo entry.
///
/// Serialized as `{ "id", "text", "completed" }`, the task-list entry layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Creates a task from user input for appending to `existing`.
    ///
    /// Returns `None` when `text` is blank after trimming.
    pub fn create(text: &str, existing: &[Task]) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::with_id(TaskId::generate(existing), trimmed, false))
    }

    /// Builds a task with a caller-provided id.
    ///
    /// Used when reconstructing tasks from storage; performs no trimming.
    pub fn with_id(id: TaskId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
