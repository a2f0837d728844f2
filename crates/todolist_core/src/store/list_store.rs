//! Overview list collection.
//!
//! # Responsibility
//! - Own the authoritative ordered collection of to-do lists.
//! - Hand out detail sessions and apply their synchronization pushes.
//! - Notify observers after every effective collection change.
//!
//! # Invariants
//! - List ids are unique within the collection.
//! - Order is insertion order modulo removals; nothing re-sorts it.
//! - Blank titles on creation and unknown ids are silent no-ops, never errors.
//! - At most one live detail session exists per list.

use crate::config::CoreConfig;
use crate::model::ids::ListId;
use crate::model::list::TodoList;
use crate::model::task::Task;
use crate::sync::update::{DetailHandoff, ListUpdater, SyncMessage};
use log::debug;
use std::collections::{BTreeMap, HashSet};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Re-render hook for the overview presentation.
pub trait ListObserver: Send {
    fn lists_changed(&self, lists: &[TodoList]);
}

impl<F> ListObserver for F
where
    F: Fn(&[TodoList]) + Send,
{
    fn lists_changed(&self, lists: &[TodoList]) {
        self(lists)
    }
}

/// Handle returned by `ListStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

/// Authoritative store of all to-do lists.
pub struct ListStore {
    overview_title: String,
    lists: Vec<TodoList>,
    open_sessions: HashSet<ListId>,
    observers: BTreeMap<ObserverId, Box<dyn ListObserver>>,
    next_observer_id: u64,
    sync_tx: Sender<SyncMessage>,
    sync_rx: Receiver<SyncMessage>,
}

impl ListStore {
    /// Creates an empty store with the given overview heading.
    pub fn new(overview_title: impl Into<String>) -> Self {
        let (sync_tx, sync_rx) = channel();
        Self {
            overview_title: overview_title.into(),
            lists: Vec::new(),
            open_sessions: HashSet::new(),
            observers: BTreeMap::new(),
            next_observer_id: 0,
            sync_tx,
            sync_rx,
        }
    }

    /// Creates a store seeded from startup configuration.
    ///
    /// Seed titles go through `add_list`, so blank seeds are skipped.
    pub fn from_config(config: &CoreConfig) -> Self {
        let mut store = Self::new(config.overview_title.as_str());
        for title in &config.seed_lists {
            store.add_list(title);
        }
        debug!(
            "event=store_init module=list_store status=ok list_count={}",
            store.lists.len()
        );
        store
    }

    /// Appends a new empty list.
    ///
    /// Returns `None` (and changes nothing) when `title` is blank after
    /// trim. The title is stored as given.
    pub fn add_list(&mut self, title: &str) -> Option<ListId> {
        if title.trim().is_empty() {
            debug!("event=list_add module=list_store status=rejected reason=blank_title");
            return None;
        }

        let list = TodoList::new(title);
        let id = list.id;
        self.lists.push(list);
        debug!(
            "event=list_add module=list_store status=ok list_id={id} title_len={}",
            title.chars().count()
        );
        self.notify();
        Some(id)
    }

    /// Removes the list with `id`. Returns whether a list was removed.
    pub fn remove_list(&mut self, id: &ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != *id);
        if self.lists.len() == before {
            debug!("event=list_remove module=list_store status=noop list_id={id}");
            return false;
        }

        debug!("event=list_remove module=list_store status=ok list_id={id}");
        self.notify();
        true
    }

    /// Replaces tasks and title of list `id` in place, keeping its position.
    ///
    /// Last write wins: the entry is overwritten without comparison.
    pub fn update_list(&mut self, id: &ListId, tasks: Vec<Task>, title: String) -> bool {
        let Some(list) = self.lists.iter_mut().find(|list| list.id == *id) else {
            debug!("event=list_update module=list_store status=noop list_id={id}");
            return false;
        };

        list.tasks = tasks;
        list.title = title;
        debug!(
            "event=list_update module=list_store status=ok list_id={id} task_count={}",
            list.tasks.len()
        );
        self.notify();
        true
    }

    /// Ordered read view for rendering.
    pub fn get_all(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn get(&self, id: &ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == *id)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Heading shown above the lists.
    pub fn overview_title(&self) -> &str {
        &self.overview_title
    }

    /// Sets the overview heading. Not validated; empty is allowed.
    ///
    /// The heading is not part of the list collection, so observers are not
    /// notified. Returns whether the heading changed.
    pub fn set_overview_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.overview_title == title {
            return false;
        }
        self.overview_title = title;
        true
    }

    /// Registers a re-render observer.
    pub fn subscribe(&mut self, observer: Box<dyn ListObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Opens list `id` for detail editing.
    ///
    /// Returns an owned copy of the list plus the updater the session must
    /// push through. Returns `None` when the list does not exist or already
    /// has a live session.
    pub fn open_list(&mut self, id: &ListId) -> Option<DetailHandoff> {
        self.apply_pending_updates();

        if self.open_sessions.contains(id) {
            debug!("event=list_open module=list_store status=rejected reason=already_open list_id={id}");
            return None;
        }
        let Some(list) = self.get(id).cloned() else {
            debug!("event=list_open module=list_store status=noop list_id={id}");
            return None;
        };

        self.open_sessions.insert(*id);
        debug!("event=list_open module=list_store status=ok list_id={id}");
        Some(DetailHandoff::new(
            list,
            ListUpdater::new(*id, self.sync_tx.clone()),
        ))
    }

    /// Returns whether list `id` currently has a live detail session.
    ///
    /// Reflects only messages already applied by `apply_pending_updates`.
    pub fn is_open(&self, id: &ListId) -> bool {
        self.open_sessions.contains(id)
    }

    /// Applies queued session pushes and releases, in send order.
    ///
    /// Returns how many updates changed a list; pushes for removed lists and
    /// session releases are not counted.
    pub fn apply_pending_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.sync_rx.try_recv() {
            match message {
                SyncMessage::Update { id, tasks, title } => {
                    if self.update_list(&id, tasks, title) {
                        applied += 1;
                    }
                }
                SyncMessage::SessionClosed(id) => {
                    self.open_sessions.remove(&id);
                    debug!("event=list_close module=list_store status=ok list_id={id}");
                }
            }
        }
        applied
    }

    fn notify(&self) {
        for observer in self.observers.values() {
            observer.lists_changed(&self.lists);
        }
    }
}

impl Default for ListStore {
    /// Startup state of the app: default heading and seed lists.
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::ListStore;
    use crate::model::task::Task;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn default_store_has_seed_lists_in_order() {
        let store = ListStore::default();
        let titles: Vec<&str> = store.get_all().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Travail", "Courses", "Sport"]);
        assert_eq!(store.overview_title(), "📌 Mes To-Do Lists");
    }

    #[test]
    fn update_keeps_position_and_id() {
        let mut store = ListStore::new("");
        let first = store.add_list("a").unwrap();
        let second = store.add_list("b").unwrap();
        let third = store.add_list("c").unwrap();

        assert!(store.update_list(&second, vec![Task::new("x")], "renamed".to_string()));

        let ids: Vec<_> = store.get_all().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![first, second, third]);
        let updated = store.get(&second).unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.tasks.len(), 1);
    }

    #[test]
    fn observers_see_effective_changes_only() {
        let mut store = ListStore::new("");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer_id = store.subscribe(Box::new(move |_: &[crate::TodoList]| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let id = store.add_list("Groceries").unwrap();
        store.add_list("   ");
        store.remove_list(&crate::ListId::generate());
        store.remove_list(&id);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(store.unsubscribe(observer_id));
        store.add_list("later");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn open_rejects_unknown_and_duplicate_sessions() {
        let mut store = ListStore::new("");
        assert!(store.open_list(&crate::ListId::generate()).is_none());

        let id = store.add_list("Sport").unwrap();
        let handoff = store.open_list(&id).unwrap();
        assert_eq!(handoff.list.id, id);
        assert_eq!(handoff.updater.list_id(), id);
        assert!(store.is_open(&id));
        assert!(store.open_list(&id).is_none());

        drop(handoff);
        assert!(store.open_list(&id).is_some());
    }
}
