//! Modal Dialog State
//!
//! Visibility of the login and signup dialogs. Every transition is
//! idempotent.

/// The two dialogs on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login,
    Signup,
}

/// Shown/hidden flag per dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub login: bool,
    pub signup: bool,
}

impl ModalState {
    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Login => self.login,
            Modal::Signup => self.signup,
        }
    }

    /// Header "Sign In" button
    pub fn open_login(&mut self) {
        self.login = true;
    }

    /// Header "Sign Up" button: never leaves both dialogs visible
    pub fn open_signup(&mut self) {
        self.switch_to(Modal::Signup);
    }

    /// In-dialog links that jump from one dialog to the other
    pub fn switch_to(&mut self, modal: Modal) {
        self.close_all();
        match modal {
            Modal::Login => self.login = true,
            Modal::Signup => self.signup = true,
        }
    }

    pub fn close(&mut self, modal: Modal) {
        match modal {
            Modal::Login => self.login = false,
            Modal::Signup => self.signup = false,
        }
    }

    /// Overlay click, signup close button, Escape
    pub fn close_all(&mut self) {
        self.login = false;
        self.signup = false;
    }
}
