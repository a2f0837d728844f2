//! Detail session over one list's tasks.
//!
//! # Responsibility
//! - Hold the working copy of one list's tasks and title while it is open.
//! - Track the single in-progress task edit.
//! - Push a full snapshot to the overview after every task mutation and on
//!   title commit.
//!
//! # Invariants
//! - The working copy is seeded by value; the store's entry is only changed
//!   through `ListUpdateSink::update_list`.
//! - At most one task is being edited; switching targets drops the
//!   unconfirmed buffer without saving it.
//! - Rejected input and unknown ids change nothing and push nothing.

use crate::model::ids::{ListId, TaskId};
use crate::model::list::TodoList;
use crate::model::task::Task;
use crate::sync::update::{DetailHandoff, ListUpdateSink, ListUpdater};
use log::debug;

/// Edit-mode state of a detail session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { task_id: TaskId, buffer: String },
}

impl EditState {
    /// Task currently being edited, if any.
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing { task_id, .. } => Some(*task_id),
        }
    }
}

/// Working state of one open list.
pub struct TaskStore<S = ListUpdater> {
    list_id: ListId,
    title: String,
    tasks: Vec<Task>,
    edit: EditState,
    updater: S,
}

impl<S: ListUpdateSink> TaskStore<S> {
    /// Starts a session from the overview's navigation bundle.
    pub fn new(handoff: DetailHandoff<S>) -> Self {
        Self::from_list(handoff.list, handoff.updater)
    }

    pub fn from_list(list: TodoList, updater: S) -> Self {
        debug!(
            "event=session_open module=task_store status=ok list_id={} task_count={}",
            list.id,
            list.tasks.len()
        );
        Self {
            list_id: list.id,
            title: list.title,
            tasks: list.tasks,
            edit: EditState::Idle,
            updater,
        }
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Working title, including uncommitted changes.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Owned copy of the current working state.
    pub fn snapshot(&self) -> TodoList {
        TodoList {
            id: self.list_id,
            title: self.title.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Appends an open task with the trimmed text.
    ///
    /// Returns `None` when `text` is blank after trim.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!(
                "event=task_add module=task_store status=rejected reason=blank_text list_id={}",
                self.list_id
            );
            return None;
        }

        let task = Task::new(trimmed);
        let id = task.id;
        self.tasks.push(task);
        debug!(
            "event=task_add module=task_store status=ok list_id={} task_id={id}",
            self.list_id
        );
        self.push();
        Some(id)
    }

    /// Removes task `id`. Returns whether a task was removed.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != *id);
        if self.tasks.len() == before {
            return false;
        }

        debug!(
            "event=task_remove module=task_store status=ok list_id={} task_id={id}",
            self.list_id
        );
        self.push();
        true
    }

    /// Flips completion of task `id`. Returns whether a task was toggled.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == *id) else {
            return false;
        };

        task.toggle();
        debug!(
            "event=task_toggle module=task_store status=ok list_id={} task_id={id} completed={}",
            self.list_id, task.completed
        );
        self.push();
        true
    }

    /// Enters edit mode for task `id` with the buffer set to `current_text`.
    ///
    /// Replaces any other in-progress edit without saving it. Unknown ids
    /// leave the edit state untouched.
    pub fn start_edit(&mut self, id: TaskId, current_text: impl Into<String>) -> bool {
        if !self.tasks.iter().any(|task| task.id == id) {
            return false;
        }

        if let Some(previous) = self.edit.task_id().filter(|previous| *previous != id) {
            debug!(
                "event=task_edit module=task_store status=discarded list_id={} task_id={previous}",
                self.list_id
            );
        }
        self.edit = EditState::Editing {
            task_id: id,
            buffer: current_text.into(),
        };
        true
    }

    /// Replaces the edit buffer while typing. No-op when idle.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit {
            EditState::Idle => false,
            EditState::Editing { buffer, .. } => {
                *buffer = text.into();
                true
            }
        }
    }

    /// Writes the buffer into the edited task and leaves edit mode.
    ///
    /// The buffer is stored verbatim: no trim, empty text allowed. Returns
    /// whether a task was changed; edit mode is left either way.
    pub fn confirm_edit(&mut self) -> bool {
        let EditState::Editing { task_id, buffer } = std::mem::take(&mut self.edit) else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            debug!(
                "event=task_edit module=task_store status=noop list_id={} task_id={task_id}",
                self.list_id
            );
            return false;
        };

        task.text = buffer;
        debug!(
            "event=task_edit module=task_store status=ok list_id={} task_id={task_id}",
            self.list_id
        );
        self.push();
        true
    }

    /// Sets the working title. Not validated and not pushed until
    /// `commit_title`.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Title field lost focus: push the current state.
    pub fn commit_title(&mut self) {
        debug!(
            "event=title_commit module=task_store status=ok list_id={} title_len={}",
            self.list_id,
            self.title.chars().count()
        );
        self.push();
    }

    fn push(&mut self) {
        self.updater
            .update_list(self.list_id, self.tasks.clone(), self.title.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::{EditState, TaskStore};
    use crate::model::ids::ListId;
    use crate::model::list::TodoList;
    use crate::model::task::Task;

    type Pushes = Vec<(ListId, Vec<Task>, String)>;

    fn recording_session(
        list: TodoList,
        pushes: &mut Pushes,
    ) -> TaskStore<impl FnMut(ListId, Vec<Task>, String) + '_> {
        TaskStore::from_list(list, move |id: ListId, tasks: Vec<Task>, title: String| {
            pushes.push((id, tasks, title))
        })
    }

    #[test]
    fn add_task_trims_and_rejects_blank() {
        let mut pushes = Pushes::new();
        let mut session = recording_session(TodoList::new("Sport"), &mut pushes);

        assert!(session.add_task(" \t ").is_none());
        let id = session.add_task("  Run  ").unwrap();

        assert_eq!(session.tasks().len(), 1);
        assert_eq!(session.tasks()[0].id, id);
        assert_eq!(session.tasks()[0].text, "Run");
        assert!(!session.tasks()[0].completed);
        drop(session);
        assert_eq!(pushes.len(), 1);
    }

    #[test]
    fn unknown_ids_push_nothing() {
        let mut pushes = Pushes::new();
        let mut session = recording_session(TodoList::new("Sport"), &mut pushes);
        let stranger = Task::new("elsewhere").id;

        assert!(!session.remove_task(&stranger));
        assert!(!session.toggle_task(&stranger));
        assert!(!session.start_edit(stranger, "x"));
        assert_eq!(session.edit_state(), &EditState::Idle);
        drop(session);
        assert!(pushes.is_empty());
    }

    #[test]
    fn switching_edit_target_discards_unconfirmed_buffer() {
        let mut pushes = Pushes::new();
        let mut session = recording_session(TodoList::new("Sport"), &mut pushes);
        let run = session.add_task("Run").unwrap();
        let swim = session.add_task("Swim").unwrap();

        session.start_edit(run, "Run");
        session.set_edit_buffer("Run far");
        session.start_edit(swim, "Swim");
        assert_eq!(session.edit_state().task_id(), Some(swim));
        session.confirm_edit();

        assert_eq!(session.tasks()[0].text, "Run");
        assert_eq!(session.tasks()[1].text, "Swim");
        assert_eq!(session.edit_state(), &EditState::Idle);
    }

    #[test]
    fn confirm_edit_stores_buffer_verbatim() {
        let mut pushes = Pushes::new();
        let mut session = recording_session(TodoList::new("Sport"), &mut pushes);
        let run = session.add_task("Run").unwrap();

        session.start_edit(run, "Run");
        session.set_edit_buffer("");
        assert!(session.confirm_edit());
        assert_eq!(session.tasks()[0].text, "");
    }

    #[test]
    fn confirm_after_edited_task_removed_leaves_edit_mode_without_push() {
        let mut pushes = Pushes::new();
        let mut session = recording_session(TodoList::new("Sport"), &mut pushes);
        let run = session.add_task("Run").unwrap();
        session.start_edit(run, "Run");
        session.remove_task(&run);

        assert!(!session.confirm_edit());
        assert_eq!(session.edit_state(), &EditState::Idle);
        drop(session);
        assert_eq!(pushes.len(), 2);
    }

    #[test]
    fn set_title_alone_does_not_push() {
        let mut pushes = Pushes::new();
        let mut session = recording_session(TodoList::new("Sport"), &mut pushes);
        session.set_title("");
        assert_eq!(session.title(), "");
        drop(session);
        assert!(pushes.is_empty());
    }
}
