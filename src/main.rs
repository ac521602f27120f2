//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod controller;
mod logger;
mod modal;
mod models;
mod shortcuts;
mod storage;
mod store;
mod todo_list;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use reactive_stores::Store;
use storage::AppStorage;
use store::AppState;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logger::init(config.log_level);

    let state = AppState::new(&config, AppStorage::detect());
    mount_to_body(move || {
        provide_context(Store::new(state));
        view! { <App /> }
    });
}
