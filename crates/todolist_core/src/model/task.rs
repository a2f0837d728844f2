//! Task domain model.
//!
//! # Responsibility
//! - Define one to-do item with its text and completion flag.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and unique within its list.
//! - A new task always starts with `completed == false`.

use crate::model::ids::TaskId;
use serde::{Deserialize, Serialize};

/// Single to-do item owned by a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Free-form description shown in the detail screen.
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open task with a generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flips completion state.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
