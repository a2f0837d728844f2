//! `update_list` callback contract and its channel-backed implementation.

use crate::model::ids::ListId;
use crate::model::list::TodoList;
use crate::model::task::Task;
use log::{debug, warn};
use std::sync::mpsc::Sender;

/// Receiver side of a detail session's synchronization push.
///
/// A push is fire-and-forget: implementations must not fail back into the
/// session, and the session never waits for an acknowledgement.
pub trait ListUpdateSink {
    /// Replaces the parent's view of list `id` with this snapshot.
    fn update_list(&mut self, id: ListId, tasks: Vec<Task>, title: String);
}

impl<F> ListUpdateSink for F
where
    F: FnMut(ListId, Vec<Task>, String),
{
    fn update_list(&mut self, id: ListId, tasks: Vec<Task>, title: String) {
        (*self)(id, tasks, title)
    }
}

/// Message queued from a session updater to its owning `ListStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SyncMessage {
    Update {
        id: ListId,
        tasks: Vec<Task>,
        title: String,
    },
    SessionClosed(ListId),
}

/// Updater handed to a detail session by `ListStore::open_list`.
///
/// Dropping the updater (normally by dropping the session that owns it)
/// releases the list so it can be opened again.
#[derive(Debug)]
pub struct ListUpdater {
    list_id: ListId,
    sender: Sender<SyncMessage>,
}

impl ListUpdater {
    pub(crate) fn new(list_id: ListId, sender: Sender<SyncMessage>) -> Self {
        Self { list_id, sender }
    }

    /// List this updater was issued for.
    pub fn list_id(&self) -> ListId {
        self.list_id
    }
}

impl ListUpdateSink for ListUpdater {
    fn update_list(&mut self, id: ListId, tasks: Vec<Task>, title: String) {
        let task_count = tasks.len();
        if self
            .sender
            .send(SyncMessage::Update { id, tasks, title })
            .is_err()
        {
            warn!("event=sync_push module=sync status=dropped list_id={id} reason=store_gone");
            return;
        }
        debug!("event=sync_push module=sync status=ok list_id={id} task_count={task_count}");
    }
}

impl Drop for ListUpdater {
    fn drop(&mut self) {
        // Store may already be gone; nothing left to release then.
        let _ = self.sender.send(SyncMessage::SessionClosed(self.list_id));
    }
}

/// Navigation bundle passed from the overview to a detail session.
///
/// `list` is an owned copy; the session never touches the store's entry
/// directly.
#[derive(Debug)]
pub struct DetailHandoff<S = ListUpdater> {
    pub list: TodoList,
    pub updater: S,
}

impl<S: ListUpdateSink> DetailHandoff<S> {
    pub fn new(list: TodoList, updater: S) -> Self {
        Self { list, updater }
    }
}
