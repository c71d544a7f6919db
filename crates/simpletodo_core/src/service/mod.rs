//! Core use-case services.
//!
//! # Responsibility
//! - Turn user intents into load, mutate, save and render passes.
//! - Keep UI layers decoupled from storage details.

pub mod todo_service;
