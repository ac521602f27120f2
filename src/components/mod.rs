//! UI Components
//!
//! Leptos components for the list and the dialogs.

mod modal_dialog;
mod new_todo_form;
mod todo_list_view;
mod todo_row;

pub use modal_dialog::{LoginModal, SignupModal};
pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
