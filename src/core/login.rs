//! Transient state behind the login screen: the two credential forms and
//! the create-user confirmation modal.

use crate::{
    core::session::SessionGate,
    error::SessionError,
};

/// Values typed into one of the forms. Mutated on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    SignIn,
    CreateUser,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub login: Credentials,
    pub new_user: Credentials,
    mode: FormMode,
    error: Option<SessionError>,
    modal: Option<Result<&'static str, SessionError>>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Inline message under the login form, if the last attempt failed.
    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Text of the confirmation modal while it is shown.
    pub fn modal_message(&self) -> Option<String> {
        self.modal.as_ref().map(|outcome| match outcome {
            Ok(message) => (*message).to_string(),
            Err(err) => err.to_string(),
        })
    }

    pub fn open_create_user(&mut self) {
        self.mode = FormMode::CreateUser;
    }

    /// Submit the login form against the gate.
    ///
    /// Returns `true` when the gate opened; the typed credentials are then
    /// discarded.
    pub fn submit_login(&mut self, gate: &mut SessionGate) -> bool {
        match gate.submit_credentials(&self.login.email, &self.login.password) {
            Ok(()) => {
                self.error = None;
                self.login.clear();
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Submit the create-user form and raise the confirmation modal with the
    /// positive or negative message.
    pub fn submit_new_user(&mut self, gate: &SessionGate) {
        let outcome = gate
            .submit_new_user(&self.new_user.email, &self.new_user.password)
            .map(|confirmation| confirmation.message);
        self.modal = Some(outcome);
    }

    /// Dismiss the modal and go back to the login form with an empty
    /// create-user form.
    pub fn return_to_login(&mut self) {
        self.modal = None;
        self.mode = FormMode::SignIn;
        self.new_user.clear();
    }
}
