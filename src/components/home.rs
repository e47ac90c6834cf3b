//! Home Screen
//!
//! The todo list: fetch on mount, create, toggle, delete and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiClient};
use crate::auth;
use crate::components::TodoRow;
use crate::store::{self, items_left_label, use_todo_store, TodoStateStoreFields};
use crate::toast::use_toaster;

/// Without a valid session the fetch fails and the inline error is shown
#[component]
pub fn Home() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    // App-owned; outlives this screen
    let store = use_todo_store();
    let (new_todo, set_new_todo) = signal(String::new());

    // Load todos on mount
    Effect::new(move |_| {
        store::store_set_loading(&store, true);
        spawn_local(async move {
            match api::fetch_todos(&client).await {
                Ok(loaded) => {
                    log::debug!("[HOME] loaded {} todos", loaded.len());
                    store::store_set_todos(&store, loaded);
                }
                Err(e) => {
                    log::warn!("[HOME] fetch failed: {}", e);
                    store::store_fail(&store, "Failed to fetch todos");
                }
            }
            store::store_set_loading(&store, false);
        });
    });

    let create = move || {
        let Some(text) = store::new_todo_text(&new_todo.get_untracked()) else { return; };

        spawn_local(async move {
            match api::create_todo(&client, &text).await {
                Ok(created) => {
                    store::store_add_todo(&store, created);
                    // Screen may have closed meanwhile
                    let _ = set_new_todo.try_set(String::new());
                }
                Err(e) => {
                    log::warn!("[HOME] create failed: {}", e);
                    store::store_fail(&store, "Failed to create todo");
                }
            }
        });
    };

    let on_toggle = Callback::new(move |id: String| {
        let current = store.todos().with_untracked(|todos| todos.iter().find(|t| t.id == id).cloned());
        let Some(current) = current else { return; };

        spawn_local(async move {
            match api::toggle_todo(&client, &current).await {
                Ok(updated) => store::store_update_todo(&store, updated),
                Err(e) => {
                    log::warn!("[HOME] toggle {} failed: {}", current.id, e);
                    store::store_fail(&store, "Failed to update todo status");
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete_todo(&client, &id).await {
                Ok(()) => store::store_remove_todo(&store, &id),
                Err(e) => {
                    log::warn!("[HOME] delete {} failed: {}", id, e);
                    store::store_fail(&store, "Failed to delete todo");
                }
            }
        });
    });

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::logout(&client).await {
                Ok(()) => {
                    toaster.success("Logged out successfully");
                    auth::clear_token();
                    store::store_reset(&store);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    log::warn!("[HOME] logout failed: {}", e);
                    toaster.error("Logout failed");
                }
            }
        });
    };

    let remaining = move || store.todos().with(|todos| items_left_label(store::remaining(todos)));

    view! {
        <div class="home-card">
            <h1 class="home-title">"📝 Todo App"</h1>

            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || new_todo.get()
                    on:input=move |ev| set_new_todo.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" { create(); }
                    }
                />
                <button class="add-btn" on:click=move |_| create()>"Add"</button>
            </div>

            {move || {
                if store.loading().get() {
                    view! { <div class="status">"Loading..."</div> }.into_any()
                } else if let Some(message) = store.error().get() {
                    view! { <div class="status error">{message}</div> }.into_any()
                } else {
                    view! {
                        <ul class="todo-list">
                            <For
                                each=move || store.todos().get()
                                key=|todo| todo.id.clone()
                                children=move |todo| {
                                    let id = todo.id.clone();
                                    let completed = Signal::derive(move || {
                                        store.todos().with(|todos| store::is_completed(todos, &id))
                                    });
                                    view! {
                                        <TodoRow
                                            todo=todo
                                            completed=completed
                                            on_toggle=on_toggle
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </ul>
                    }.into_any()
                }
            }}

            <div class="remaining">{remaining}</div>

            <div class="logout-row">
                <button class="logout-btn" on:click=logout>"Logout"</button>
            </div>
        </div>
    }
}
