//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the Home screen.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// Home screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Records mirrored from the backend, in server order then append order
    pub todos: Vec<Todo>,
    /// Initial fetch in flight
    pub loading: bool,
    /// Last failed operation's message
    pub error: Option<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Create the store at the app root so in-flight requests outlive the Home screen
pub fn provide_todo_store() -> TodoStore {
    let store = Store::new(TodoState::default());
    provide_context(store);
    store
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// List Helpers
// ========================

/// Replace the record with the same id; unknown ids are ignored
pub fn replace_todo(todos: &mut [Todo], updated: Todo) {
    if let Some(slot) = todos.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

pub fn remove_todo(todos: &mut Vec<Todo>, id: &str) {
    todos.retain(|t| t.id != id);
}

/// Text to submit for a new todo; `None` when the input is blank
pub fn new_todo_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Completion flag of the record with `id`, false once it is gone
pub fn is_completed(todos: &[Todo], id: &str) -> bool {
    todos.iter().any(|t| t.id == id && t.completed)
}

/// Number of records still open
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// "1 item left" / "3 items left"
pub fn items_left_label(count: usize) -> String {
    format!("{} item{} left", count, if count == 1 { "" } else { "s" })
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_todos(store: &TodoStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
    *store.error().write() = None;
}

pub fn store_add_todo(store: &TodoStore, todo: Todo) {
    store.todos().write().push(todo);
    *store.error().write() = None;
}

pub fn store_update_todo(store: &TodoStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
    *store.error().write() = None;
}

pub fn store_remove_todo(store: &TodoStore, id: &str) {
    remove_todo(&mut store.todos().write(), id);
    *store.error().write() = None;
}

pub fn store_fail(store: &TodoStore, message: &str) {
    *store.error().write() = Some(message.to_string());
}

pub fn store_set_loading(store: &TodoStore, loading: bool) {
    *store.loading().write() = loading;
}

/// Forget the previous session's list on logout
pub fn store_reset(store: &TodoStore) {
    store.todos().write().clear();
    *store.loading().write() = false;
    *store.error().write() = None;
}
