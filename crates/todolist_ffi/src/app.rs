//! Process-wide app state behind the FFI functions.
//!
//! # Responsibility
//! - Hold the overview store and the one detail session a phone screen shows.
//! - Translate string ids from Dart into core ids and back.
//!
//! # Invariants
//! - Every detail mutation is followed by applying pending pushes, so the
//!   overview reflects it before the call returns.
//! - Opening an existing list closes any session that is still open; an
//!   unknown id leaves the current session alone.

use log::debug;
use todolist_core::{
    CoreConfig, EditState, IdParseError, ListId, ListStore, TaskId, TaskStore, TodoList,
};

/// Overview row for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub id: String,
    pub title: String,
    pub task_count: u32,
    pub completed_count: u32,
}

/// Overview screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewSnapshot {
    /// Editable heading above the lists.
    pub title: String,
    pub lists: Vec<ListSummary>,
}

/// Detail row for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Whether this row shows the edit field.
    pub editing: bool,
}

/// Detail screen state; `list_id == None` when no list is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSnapshot {
    pub list_id: Option<String>,
    pub title: String,
    pub tasks: Vec<TaskItem>,
    /// Current edit field content while a task is being edited.
    pub edit_buffer: Option<String>,
}

/// Result envelope for mutating calls.
///
/// `ok == false` only for bridge-level failures (bad id string, no open
/// list). Ignored input and unknown ids are `ok == true` with `changed ==
/// false`, mirroring the core's silent no-op policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub changed: bool,
    /// Id of a created list or task.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    pub(crate) fn applied(changed: bool, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed,
            id: None,
            message: message.into(),
        }
    }

    pub(crate) fn created(id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: id.is_some(),
            id,
            message: message.into(),
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            id: None,
            message: message.into(),
        }
    }
}

pub(crate) struct AppState {
    store: ListStore,
    session: Option<TaskStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}

impl AppState {
    pub(crate) fn from_config(config: &CoreConfig) -> Self {
        Self {
            store: ListStore::from_config(config),
            session: None,
        }
    }

    pub(crate) fn overview(&self) -> OverviewSnapshot {
        OverviewSnapshot {
            title: self.store.overview_title().to_string(),
            lists: self.store.get_all().iter().map(to_list_summary).collect(),
        }
    }

    pub(crate) fn set_overview_title(&mut self, title: String) -> ActionResponse {
        let changed = self.store.set_overview_title(title);
        ActionResponse::applied(changed, "Heading update processed.")
    }

    pub(crate) fn add_list(&mut self, title: &str) -> ActionResponse {
        match self.store.add_list(title) {
            Some(id) => ActionResponse::created(Some(id.to_string()), "List created."),
            None => ActionResponse::created(None, "Blank title ignored."),
        }
    }

    pub(crate) fn remove_list(&mut self, list_id: &str) -> ActionResponse {
        let id = match list_id.parse::<ListId>() {
            Ok(id) => id,
            Err(err) => return id_failure("remove_list", &err),
        };
        if self.session.as_ref().map(TaskStore::list_id) == Some(id) {
            self.close_list();
        }
        let changed = self.store.remove_list(&id);
        ActionResponse::applied(changed, if changed { "List removed." } else { "No such list." })
    }

    pub(crate) fn open_list(&mut self, list_id: &str) -> ActionResponse {
        let id = match list_id.parse::<ListId>() {
            Ok(id) => id,
            Err(err) => return id_failure("open_list", &err),
        };
        if self.store.get(&id).is_none() {
            return ActionResponse::applied(false, "No such list.");
        }
        self.close_list();
        match self.store.open_list(&id) {
            Some(handoff) => {
                self.session = Some(TaskStore::new(handoff));
                ActionResponse::applied(true, "List opened.")
            }
            None => ActionResponse::applied(false, "No such list."),
        }
    }

    /// Ends the detail session. Returns whether one was open.
    pub(crate) fn close_list(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        debug!(
            "event=session_close module=ffi status=ok list_id={}",
            session.list_id()
        );
        drop(session);
        self.store.apply_pending_updates();
        true
    }

    pub(crate) fn detail(&self) -> DetailSnapshot {
        let Some(session) = self.session.as_ref() else {
            return DetailSnapshot {
                list_id: None,
                title: String::new(),
                tasks: Vec::new(),
                edit_buffer: None,
            };
        };
        let editing = session.edit_state().task_id();
        let edit_buffer = match session.edit_state() {
            EditState::Idle => None,
            EditState::Editing { buffer, .. } => Some(buffer.clone()),
        };
        let list = session.snapshot();
        DetailSnapshot {
            list_id: Some(list.id.to_string()),
            title: list.title,
            tasks: list
                .tasks
                .into_iter()
                .map(|task| TaskItem {
                    editing: editing == Some(task.id),
                    id: task.id.to_string(),
                    text: task.text,
                    completed: task.completed,
                })
                .collect(),
            edit_buffer,
        }
    }

    pub(crate) fn add_task(&mut self, text: &str) -> ActionResponse {
        self.with_session("detail_add_task", |session| {
            match session.add_task(text) {
                Some(id) => ActionResponse::created(Some(id.to_string()), "Task created."),
                None => ActionResponse::created(None, "Blank task ignored."),
            }
        })
    }

    pub(crate) fn remove_task(&mut self, task_id: &str) -> ActionResponse {
        self.with_task_id("detail_remove_task", task_id, |session, id| {
            ActionResponse::applied(session.remove_task(&id), "Task remove processed.")
        })
    }

    pub(crate) fn toggle_task(&mut self, task_id: &str) -> ActionResponse {
        self.with_task_id("detail_toggle_task", task_id, |session, id| {
            ActionResponse::applied(session.toggle_task(&id), "Task toggle processed.")
        })
    }

    pub(crate) fn start_edit(&mut self, task_id: &str, current_text: String) -> ActionResponse {
        self.with_task_id("detail_start_edit", task_id, |session, id| {
            ActionResponse::applied(session.start_edit(id, current_text), "Edit started.")
        })
    }

    pub(crate) fn set_edit_buffer(&mut self, text: String) -> ActionResponse {
        self.with_session("detail_set_edit_buffer", |session| {
            ActionResponse::applied(session.set_edit_buffer(text), "Edit buffer updated.")
        })
    }

    pub(crate) fn confirm_edit(&mut self) -> ActionResponse {
        self.with_session("detail_confirm_edit", |session| {
            ActionResponse::applied(session.confirm_edit(), "Edit confirm processed.")
        })
    }

    pub(crate) fn set_title(&mut self, title: String) -> ActionResponse {
        self.with_session("detail_set_title", |session| {
            session.set_title(title);
            ActionResponse::applied(true, "Title updated.")
        })
    }

    pub(crate) fn commit_title(&mut self) -> ActionResponse {
        self.with_session("detail_commit_title", |session| {
            session.commit_title();
            ActionResponse::applied(true, "Title committed.")
        })
    }

    fn with_session(
        &mut self,
        operation: &str,
        f: impl FnOnce(&mut TaskStore) -> ActionResponse,
    ) -> ActionResponse {
        let Some(session) = self.session.as_mut() else {
            return ActionResponse::failure(format!("{operation} failed: no list is open"));
        };
        let response = f(session);
        self.store.apply_pending_updates();
        response
    }

    fn with_task_id(
        &mut self,
        operation: &str,
        task_id: &str,
        f: impl FnOnce(&mut TaskStore, TaskId) -> ActionResponse,
    ) -> ActionResponse {
        let id = match task_id.parse::<TaskId>() {
            Ok(id) => id,
            Err(err) => return id_failure(operation, &err),
        };
        self.with_session(operation, |session| f(session, id))
    }
}

fn id_failure(operation: &str, err: &IdParseError) -> ActionResponse {
    ActionResponse::failure(format!("{operation} failed: {err}"))
}

fn to_list_summary(list: &TodoList) -> ListSummary {
    ListSummary {
        id: list.id.to_string(),
        title: list.title.clone(),
        task_count: saturating_u32(list.tasks.len()),
        completed_count: saturating_u32(list.completed_count()),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
