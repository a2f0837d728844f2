//! To-do domain model.
//!
//! # Responsibility
//! - Define the list/task value types shared by stores and UI bridges.
//! - Own identifier generation and parsing.
//!
//! # Invariants
//! - Every list and task is identified by a generated, collision-resistant id.
//! - Model types are plain values; they are copied across session boundaries,
//!   never shared by reference.

pub mod ids;
pub mod list;
pub mod task;
