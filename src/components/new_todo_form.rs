//! New Todo Form Component
//!
//! Text input for appending items; Enter or the add button submits.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_app_store};

/// Form for creating new items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_todo(&store, &new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    id="ToDoText"
                    type="text"
                    placeholder="Add new item..."
                    autocomplete="off"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
