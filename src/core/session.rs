//! Mock login gate.
//!
//! There is exactly one accepted credential pair and no logout path: once
//! the gate opens it stays open for the life of the process.

use crate::error::SessionError;

pub const ACCEPTED_EMAIL: &str = "asharkwhois@sentient.gov";
pub const ACCEPTED_PASSWORD: &str = "password";

pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid credentials. Try asharkwhois@sentient.gov / password.";
pub const USER_CREATED_MESSAGE: &str = "User created successfully!";
pub const USER_CREATION_FAILED_MESSAGE: &str =
    "Failed to create user. Please fill out all fields.";

/// Message shown in the create-user confirmation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: &'static str,
}

#[derive(Debug, Default)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check a login attempt against the accepted pair.
    ///
    /// A failed attempt never touches the authenticated flag, so a rejected
    /// retry after a successful login cannot close the gate again.
    pub fn submit_credentials(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        if email == ACCEPTED_EMAIL && password == ACCEPTED_PASSWORD {
            if !self.authenticated {
                tracing::info!(email, "Login accepted");
            }
            self.authenticated = true;
            Ok(())
        } else {
            tracing::info!(email, "Login rejected");
            Err(SessionError::InvalidCredentials)
        }
    }

    /// Pretend to register a new user.
    ///
    /// Nothing is stored; the only outcome is the message for the modal.
    pub fn submit_new_user(&self, email: &str, password: &str) -> Result<Confirmation, SessionError> {
        if email.is_empty() || password.is_empty() {
            tracing::debug!("Create-user form submitted with missing fields");
            return Err(SessionError::Validation);
        }
        tracing::info!(email, "Create-user form accepted");
        Ok(Confirmation {
            message: USER_CREATED_MESSAGE,
        })
    }
}
