//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose overview and detail-screen actions to Dart via FRB.
//! - Keep error semantics simple: envelopes and snapshots, no exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Ids cross the boundary as UUID strings.

use crate::app::{ActionResponse, AppState, DetailSnapshot, OverviewSnapshot};
use log::warn;
use std::sync::{Mutex, OnceLock, PoisonError};
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig,
};

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Resets app state from configuration JSON.
///
/// Blank input restores the built-in startup state. Any open list is
/// closed. On parse failure the current state is kept.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_app(config_json: String) -> ActionResponse {
    let config = match CoreConfig::from_json_str(config_json.as_str()) {
        Ok(config) => config,
        Err(err) => {
            warn!("event=configure module=ffi status=error reason=invalid_config");
            return ActionResponse::failure(format!("configure_app failed: {err}"));
        }
    };
    with_app(|app| *app = AppState::from_config(&config));
    ActionResponse::applied(true, "App configured.")
}

/// Returns the overview heading and list rows in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn overview_snapshot() -> OverviewSnapshot {
    with_app(|app| app.overview())
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_overview_title(title: String) -> ActionResponse {
    with_app(|app| app.set_overview_title(title))
}

/// Creates a list; blank titles are ignored (`changed == false`).
#[flutter_rust_bridge::frb(sync)]
pub fn add_list(title: String) -> ActionResponse {
    with_app(|app| app.add_list(title.as_str()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn remove_list(list_id: String) -> ActionResponse {
    with_app(|app| app.remove_list(list_id.as_str()))
}

/// Opens a list on the detail screen, closing any open one.
#[flutter_rust_bridge::frb(sync)]
pub fn open_list(list_id: String) -> ActionResponse {
    with_app(|app| app.open_list(list_id.as_str()))
}

/// Leaves the detail screen. Returns whether a list was open.
#[flutter_rust_bridge::frb(sync)]
pub fn close_list() -> bool {
    with_app(AppState::close_list)
}

#[flutter_rust_bridge::frb(sync)]
pub fn detail_snapshot() -> DetailSnapshot {
    with_app(|app| app.detail())
}

#[flutter_rust_bridge::frb(sync)]
pub fn detail_add_task(text: String) -> ActionResponse {
    with_app(|app| app.add_task(text.as_str()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn detail_remove_task(task_id: String) -> ActionResponse {
    with_app(|app| app.remove_task(task_id.as_str()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn detail_toggle_task(task_id: String) -> ActionResponse {
    with_app(|app| app.toggle_task(task_id.as_str()))
}

/// Long-press on a task row.
#[flutter_rust_bridge::frb(sync)]
pub fn detail_start_edit(task_id: String, current_text: String) -> ActionResponse {
    with_app(|app| app.start_edit(task_id.as_str(), current_text))
}

#[flutter_rust_bridge::frb(sync)]
pub fn detail_set_edit_buffer(text: String) -> ActionResponse {
    with_app(|app| app.set_edit_buffer(text))
}

/// Submit on the task edit field.
#[flutter_rust_bridge::frb(sync)]
pub fn detail_confirm_edit() -> ActionResponse {
    with_app(AppState::confirm_edit)
}

/// Typing in the title field; not synced until `detail_commit_title`.
#[flutter_rust_bridge::frb(sync)]
pub fn detail_set_title(title: String) -> ActionResponse {
    with_app(|app| app.set_title(title))
}

/// Title field lost focus.
#[flutter_rust_bridge::frb(sync)]
pub fn detail_commit_title() -> ActionResponse {
    with_app(AppState::commit_title)
}

fn with_app<T>(f: impl FnOnce(&mut AppState) -> T) -> T {
    let mut guard = APP_STATE
        .get_or_init(|| Mutex::new(AppState::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}
