//! Domain model for the task list and its display filter.
//!
//! # Responsibility
//! - Define the task record persisted in the task-list entry.
//! - Define the closed set of list filters.
//!
//! # Invariants
//! - A task id never changes after creation.
//! - Insertion order of the task list is its display order.

pub mod filter;
pub mod task;
