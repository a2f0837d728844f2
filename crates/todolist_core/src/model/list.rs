//! List domain model.
//!
//! # Responsibility
//! - Define the named, ordered task collection rendered on the overview.
//!
//! # Invariants
//! - `id` never changes after creation.
//! - `tasks` keeps insertion order; there is no reordering operation.
//! - `title` may be empty once the list exists (only creation validates it).

use crate::model::ids::ListId;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Named to-do list with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl TodoList {
    /// Creates an empty list with a generated id.
    ///
    /// Title validation is a store concern; this constructor accepts any
    /// string.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ListId::generate(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Number of tasks marked completed.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}
