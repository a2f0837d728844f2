//! Session-to-overview synchronization contract.
//!
//! # Responsibility
//! - Define the single-method `update_list` callback a detail session pushes to.
//! - Provide the channel-backed updater handed out by `ListStore`.
//!
//! # Invariants
//! - Pushes carry owned snapshots; no reference to the parent collection
//!   crosses the session boundary.
//! - Pushes are delivered in send order (FIFO).

pub mod update;
