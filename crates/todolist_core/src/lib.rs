//! Core state model for the to-do list app.
//! This crate owns list/task identity and the overview/detail mutation protocol.

pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod sync;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::ids::{IdParseError, ListId, TaskId};
pub use model::list::TodoList;
pub use model::task::Task;
pub use store::list_store::{ListObserver, ListStore, ObserverId};
pub use store::task_store::{EditState, TaskStore};
pub use sync::update::{DetailHandoff, ListUpdateSink, ListUpdater};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
