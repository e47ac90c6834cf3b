//! Todo Row Component
//!
//! One record in the list: checkbox, text and delete button.

use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn TodoRow(
    todo: Todo,
    /// Live flag from the store; `todo.completed` is only the value at first render
    #[prop(into)] completed: Signal<bool>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let id = todo.id.clone();
    let toggle_id = id.clone();

    view! {
        <li class="todo-row">
            <div class="todo-main">
                <input
                    type="checkbox"
                    prop:checked=move || completed.get()
                    on:change=move |ev| {
                        // Mirrors the store until the server answers
                        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(completed.get_untracked());
                        on_toggle.run(toggle_id.clone());
                    }
                />
                <span class={move || if completed.get() { "todo-text completed" } else { "todo-text" }}>
                    {todo.text}
                </span>
            </div>
            <button class="delete-btn" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </li>
    }
}
