//! Todo List App
//!
//! Header with the dialog triggers, the list, and the page-wide key bindings.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{LoginModal, NewTodoForm, SignupModal, TodoListView};
use crate::shortcuts::Shortcut;
use crate::store::{
    store_clear_all, store_close_modals, store_open_login, store_open_signup, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = use_app_store();

    // Page-wide shortcuts, bound once for the lifetime of the page
    let _keys = window_event_listener(ev::keydown, move |ev| {
        match Shortcut::from_event(&ev) {
            Some(Shortcut::CloseModals) => store_close_modals(&store),
            Some(Shortcut::ClearAll) => {
                ev.prevent_default();
                store_clear_all(&store);
            }
            None => {}
        }
    });

    let summary = move || {
        let todos = store.todos().read();
        let (remaining, total) = (todos.list().remaining(), todos.list().len());
        format!("{} of {} remaining", remaining, total)
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"To Do List"</h1>
                <div class="auth-buttons">
                    <button id="openLogin" on:click=move |_| store_open_login(&store)>"Sign In"</button>
                    <button id="openSignup" on:click=move |_| store_open_signup(&store)>"Sign Up"</button>
                </div>
            </header>

            <main class="main-content">
                <NewTodoForm />
                <TodoListView />
                <p class="item-count">{summary}</p>
                <p class="hint">"Ctrl+Shift+Backspace clears the list"</p>
            </main>

            <LoginModal />
            <SignupModal />
        </div>
    }
}
