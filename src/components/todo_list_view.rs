//! Todo List View Component
//!
//! Renders the list in storage order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        let todos = store.todos().read();
        let editing = todos.editing().map(|session| session.index);
        let rows: Vec<_> = todos
            .items()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, item)| (index, item, editing == Some(index)))
            .collect();
        rows
    };

    view! {
        <Show when=move || store.todos().read().list().is_empty()>
            <p class="empty-list">"Nothing to do"</p>
        </Show>
        <div id="todoList" class="todo-list">
            <For
                each=rows
                // Identity is positional; include every field so any change re-renders the row
                key=|(index, item, editing)| (*index, item.text.clone(), item.completed, *editing)
                children=move |(index, item, editing)| {
                    view! { <TodoRow index=index item=item editing=editing /> }
                }
            />
        </div>
    }
}
