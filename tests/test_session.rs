//! Login gate and create-user behaviour.

mod common;

use welcomedesk::core::session::{
    ACCEPTED_EMAIL, ACCEPTED_PASSWORD, USER_CREATED_MESSAGE, USER_CREATION_FAILED_MESSAGE,
};
use welcomedesk::error::SessionError;

use common::*;

#[test]
fn test_rejected_pairs_keep_gate_closed() {
    let mut gate = SessionGate::new();
    let attempts = [
        ("", ""),
        (ACCEPTED_EMAIL, ""),
        ("", ACCEPTED_PASSWORD),
        (ACCEPTED_EMAIL, "Password"),
        ("ASHARKWHOIS@sentient.gov", ACCEPTED_PASSWORD),
        ("someone@example.com", "hunter2"),
    ];
    for (email, password) in attempts {
        assert_eq!(
            gate.submit_credentials(email, password),
            Err(SessionError::InvalidCredentials),
            "{email:?}/{password:?} must be rejected"
        );
        assert!(!gate.is_authenticated());
    }
}

#[test]
fn test_invalid_credentials_message_names_the_demo_pair() {
    assert_eq!(
        SessionError::InvalidCredentials.to_string(),
        "Invalid credentials. Try asharkwhois@sentient.gov / password."
    );
}

#[test]
fn test_accepted_pair_opens_gate_for_good() {
    let mut gate = SessionGate::new();
    assert_eq!(gate.submit_credentials(ACCEPTED_EMAIL, ACCEPTED_PASSWORD), Ok(()));
    assert!(gate.is_authenticated());

    // Idempotent, and a later bad attempt does not close it.
    assert_eq!(gate.submit_credentials(ACCEPTED_EMAIL, ACCEPTED_PASSWORD), Ok(()));
    assert!(gate.submit_credentials("x", "y").is_err());
    assert!(gate.is_authenticated());
}

#[test]
fn test_new_user_requires_both_fields() {
    let gate = SessionGate::new();

    let failure = gate.submit_new_user("", "x").unwrap_err();
    assert_eq!(failure, SessionError::Validation);
    assert_eq!(failure.to_string(), USER_CREATION_FAILED_MESSAGE);
    assert_eq!(failure.to_string(), "Failed to create user. Please fill out all fields.");
    assert!(gate.submit_new_user("a@b.com", "").is_err());
    assert!(gate.submit_new_user("", "").is_err());

    let confirmation = gate.submit_new_user("a@b.com", "pw").unwrap();
    assert_eq!(confirmation.message, USER_CREATED_MESSAGE);
    assert_eq!(confirmation.message, "User created successfully!");

    assert!(!gate.is_authenticated(), "creating a user never logs in");
}
