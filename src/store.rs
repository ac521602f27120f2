//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Command helpers
//! below wrap the controller and log storage failures; the in-memory list
//! is kept either way.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::controller::TodoController;
use crate::modal::{Modal, ModalState};
use crate::storage::AppStorage;

/// Global application state
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// To-do list, its storage and the active edit
    pub todos: TodoController<AppStorage>,
    /// Login/signup dialog visibility
    pub modals: ModalState,
}

impl AppState {
    /// Build the controller once at startup and load the saved list
    pub fn new(config: &AppConfig, storage: AppStorage) -> Self {
        let mut todos = TodoController::new(storage, config.storage_key.clone());
        let loaded = todos.load();
        log::info!("restored {} items from '{}'", loaded, config.storage_key);
        Self {
            todos,
            modals: ModalState::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Todo Commands
// ========================

/// Add an item. Returns true if the list changed (input should be cleared).
pub fn store_add_todo(store: &AppStore, text: &str) -> bool {
    let todos_field = store.todos();
    let mut todos = todos_field.write();
    let before = todos.list().len();
    if let Err(e) = todos.add(text) {
        log::error!("add not saved: {}", e);
    }
    todos.list().len() != before
}

pub fn store_set_completed(store: &AppStore, index: usize, completed: bool) {
    if let Err(e) = store.todos().write().set_completed(index, completed) {
        log::error!("toggle not saved: {}", e);
    }
}

pub fn store_begin_edit(store: &AppStore, index: usize) {
    store.todos().write().begin_edit(index);
}

/// Commit the open edit with the final contents of the edit field
pub fn store_commit_edit(store: &AppStore, draft: String) {
    // Skip the write when nothing is open, e.g. the blur following Escape
    if store.todos().read_untracked().editing().is_none() {
        return;
    }
    let todos_field = store.todos();
    let mut todos = todos_field.write();
    todos.update_draft(draft);
    if let Err(e) = todos.commit_edit() {
        log::error!("edit not saved: {}", e);
    }
}

pub fn store_cancel_edit(store: &AppStore) {
    if store.todos().read_untracked().editing().is_some() {
        store.todos().write().cancel_edit();
    }
}

pub fn store_delete_todo(store: &AppStore, index: usize) {
    if let Err(e) = store.todos().write().delete(index) {
        log::error!("delete not saved: {}", e);
    }
}

pub fn store_clear_all(store: &AppStore) {
    if let Err(e) = store.todos().write().clear_all() {
        log::error!("clear not saved: {}", e);
    }
}

// ========================
// Modal Commands
// ========================

pub fn store_open_login(store: &AppStore) {
    store.modals().write().open_login();
}

pub fn store_open_signup(store: &AppStore) {
    store.modals().write().open_signup();
}

pub fn store_switch_modal(store: &AppStore, modal: Modal) {
    store.modals().write().switch_to(modal);
}

pub fn store_close_modal(store: &AppStore, modal: Modal) {
    store.modals().write().close(modal);
}

pub fn store_close_modals(store: &AppStore) {
    store.modals().write().close_all();
}
