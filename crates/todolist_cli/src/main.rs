//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` linkage.
//! - Print the startup overview so seed configuration can be eyeballed.

use todolist_core::ListStore;

fn main() {
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());

    let store = ListStore::default();
    println!("overview title={}", store.overview_title());
    for list in store.get_all() {
        println!("list id={} title={} tasks={}", list.id, list.title, list.tasks.len());
    }
}
