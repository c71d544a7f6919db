//! Persistence boundary.
//!
//! # Responsibility
//! - Provide a durable string-keyed store scoped to the application.
//! - Map the task list and selected filter onto two independent entries.
//!
//! # Invariants
//! - Callers above this layer never see storage failures; they are logged.
//! - Every write replaces the whole entry value.

pub mod kv;
pub mod todo_storage;
