//! Todo Row Component
//!
//! One item: checkbox, label, edit and delete buttons. While editing, the
//! label is replaced by a focused text field.

use leptos::html;
use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{
    store_begin_edit, store_cancel_edit, store_commit_edit, store_delete_todo,
    store_set_completed, use_app_store,
};

/// A single item row
#[component]
pub fn TodoRow(index: usize, item: TodoItem, editing: bool) -> impl IntoView {
    let store = use_app_store();

    let completed = item.completed;
    let text = item.text;

    let label = if editing {
        let input_ref = NodeRef::<html::Input>::new();
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        });

        view! {
            <input
                type="text"
                class="edit-input"
                node_ref=input_ref
                value=text
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            store_commit_edit(&store, event_target_value(&ev));
                        }
                        "Escape" => store_cancel_edit(&store),
                        _ => {}
                    }
                }
                on:blur=move |ev| store_commit_edit(&store, event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! { <span class="item-text">{text}</span> }.into_any()
    };

    view! {
        <div class=if completed { "todo-item completed" } else { "todo-item" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |ev| store_set_completed(&store, index, event_target_checked(&ev))
            />

            {label}

            <div class="actions">
                <button class="edit-btn" on:click=move |_| store_begin_edit(&store, index)>"✏️"</button>
                <button class="delete-btn" on:click=move |_| store_delete_todo(&store, index)>"✖"</button>
            </div>
        </div>
    }
}
