//! Modal Dialog Components
//!
//! Login and signup dialogs. Each renders an overlay and a panel; the
//! `hidden` class is applied while the dialog is closed.

use leptos::prelude::*;

use crate::modal::Modal;
use crate::store::{
    store_close_modal, store_close_modals, store_switch_modal, use_app_store,
    AppStateStoreFields,
};

/// Overlay + panel shell shared by both dialogs
#[component]
fn ModalShell(
    #[prop(into)] id: String,
    modal: Modal,
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.modals().read().is_open(modal);

    view! {
        <div id=id class=move || if is_open() { "modal" } else { "modal hidden" }>
            <div class="modal-overlay" on:click=move |_| store_close_modals(&store)></div>
            <div class="modal-content">
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Sign-in dialog. Its close button only closes itself.
#[component]
pub fn LoginModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ModalShell
            id="loginModal"
            modal=Modal::Login
            title="Sign In"
            on_close=move |_| store_close_modal(&store, Modal::Login)
        >
            <form class="modal-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <input type="email" placeholder="Email" />
                <input type="password" placeholder="Password" />
                <button type="submit">"Sign In"</button>
            </form>
            <p class="modal-switch">
                "No account? "
                <button type="button" class="link-btn" on:click=move |_| store_switch_modal(&store, Modal::Signup)>
                    "Sign Up"
                </button>
            </p>
        </ModalShell>
    }
}

/// Sign-up dialog. Its close button closes every dialog.
#[component]
pub fn SignupModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ModalShell
            id="signupModal"
            modal=Modal::Signup
            title="Sign Up"
            on_close=move |_| store_close_modals(&store)
        >
            <form class="modal-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <input type="text" placeholder="Name" />
                <input type="email" placeholder="Email" />
                <input type="password" placeholder="Password" />
                <button type="submit">"Create Account"</button>
            </form>
            <p class="modal-switch">
                "Already registered? "
                <button type="button" class="link-btn" on:click=move |_| store_switch_modal(&store, Modal::Login)>
                    "Sign In"
                </button>
            </p>
        </ModalShell>
    }
}
