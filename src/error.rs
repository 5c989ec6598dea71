//! Error types for the welcome desk client.

use crate::core::session::{
    INVALID_CREDENTIALS_MESSAGE, USER_CREATION_FAILED_MESSAGE,
};

/// Failures of the mock login gate.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    #[error("{}", USER_CREATION_FAILED_MESSAGE)]
    Validation,
}

/// Failures talking to the recipe-generation service.
///
/// None of these reach the user; the controller collapses them into one
/// generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeFetchError {
    #[error("Request to recipe service failed: {0}")]
    Transport(String),

    #[error("Recipe service answered with HTTP {0}")]
    Status(u16),

    #[error("Recipe service returned an unreadable body: {0}")]
    Decode(String),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
