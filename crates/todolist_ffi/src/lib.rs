//! Flutter bridge for the to-do list core.

pub mod api;
mod app;

pub use app::{ActionResponse, DetailSnapshot, ListSummary, OverviewSnapshot, TaskItem};
