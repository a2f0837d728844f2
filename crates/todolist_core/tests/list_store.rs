use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use todolist_core::{ListId, ListStore, TaskStore, TodoList};

fn counting_observer(store: &mut ListStore) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store.subscribe(Box::new(move |_: &[TodoList]| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    calls
}

#[test]
fn add_list_rejects_blank_titles() {
    let mut store = ListStore::new("Lists");

    assert!(store.add_list("").is_none());
    assert!(store.add_list("   ").is_none());
    assert!(store.is_empty());
}

#[test]
fn add_list_appends_one_empty_list() {
    let mut store = ListStore::default();
    let before = store.len();

    let id = store.add_list("Groceries").unwrap();

    assert_eq!(store.len(), before + 1);
    let last = store.get_all().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.title, "Groceries");
    assert!(last.tasks.is_empty());
    assert_eq!(
        store.get_all().iter().filter(|list| list.id == id).count(),
        1
    );
}

#[test]
fn ids_stay_unique_across_adds_and_removes() {
    let mut store = ListStore::new("Lists");
    let mut removed = Vec::new();

    for round in 0..50 {
        let id = store.add_list(&format!("list {round}")).unwrap();
        if round % 3 == 0 {
            store.remove_list(&id);
            removed.push(id);
        }
        let ids: HashSet<ListId> = store.get_all().iter().map(|list| list.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    for id in removed {
        assert!(store.get(&id).is_none());
    }
}

#[test]
fn remove_unknown_list_is_noop() {
    let mut store = ListStore::default();
    let before = store.get_all().to_vec();

    assert!(!store.remove_list(&ListId::generate()));

    assert_eq!(store.get_all(), before.as_slice());
}

#[test]
fn remove_keeps_remaining_order() {
    let mut store = ListStore::default();
    let courses = store.get_all()[1].id;

    assert!(store.remove_list(&courses));

    let titles: Vec<&str> = store.get_all().iter().map(|list| list.title.as_str()).collect();
    assert_eq!(titles, vec!["Travail", "Sport"]);
}

#[test]
fn update_unknown_list_is_noop() {
    let mut store = ListStore::default();
    let before = store.get_all().to_vec();

    assert!(!store.update_list(&ListId::generate(), Vec::new(), "ghost".to_string()));

    assert_eq!(store.get_all(), before.as_slice());
}

#[test]
fn overview_title_accepts_empty_and_reports_changes() {
    let mut store = ListStore::default();
    let calls = counting_observer(&mut store);

    assert!(store.set_overview_title(""));
    assert!(!store.set_overview_title(""));
    assert_eq!(store.overview_title(), "");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn applied_session_push_notifies_once() {
    let mut store = ListStore::default();
    let sport = store.get_all()[2].id;
    let calls = counting_observer(&mut store);

    let mut session = TaskStore::new(store.open_list(&sport).unwrap());
    session.add_task("Run").unwrap();
    assert!(!session.confirm_edit());
    drop(session);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.apply_pending_updates(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn ignored_updates_do_not_notify() {
    let mut store = ListStore::default();
    let sport = store.get_all()[2].id;
    let calls = counting_observer(&mut store);

    assert!(!store.update_list(&ListId::generate(), Vec::new(), "ghost".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let mut session = TaskStore::new(store.open_list(&sport).unwrap());
    store.remove_list(&sport);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    session.add_task("Run").unwrap();
    assert_eq!(store.apply_pending_updates(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
