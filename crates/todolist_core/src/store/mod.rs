//! In-memory state containers.
//!
//! # Responsibility
//! - `list_store`: the overview's authoritative list collection.
//! - `task_store`: the transient working copy of one open list.

pub mod list_store;
pub mod task_store;
