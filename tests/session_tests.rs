// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::auth::{AuthError, AuthState, IdentityProvider, Session};

/// Provider double with a fixed verification id, OTP code, and user ids.
struct FixedProvider {
    unavailable: bool,
}

impl FixedProvider {
    fn up() -> FixedProvider {
        FixedProvider { unavailable: false }
    }

    fn down() -> FixedProvider {
        FixedProvider { unavailable: true }
    }
}

impl IdentityProvider for FixedProvider {
    fn request_code(&self, phone: &str) -> Result<String, AuthError> {
        if self.unavailable {
            return Err(AuthError::Provider("service unavailable".to_string()));
        }
        assert!(phone.starts_with("+91"));
        Ok("vid-1".to_string())
    }

    fn submit_code(&self, verification_id: &str, code: &str) -> Result<String, AuthError> {
        if verification_id == "vid-1" && code == "123456" {
            Ok("user-9".to_string())
        } else {
            Err(AuthError::Provider("invalid code".to_string()))
        }
    }

    fn sign_in_with_credential(&self, id_token: &str) -> Result<String, AuthError> {
        if id_token.is_empty() {
            return Err(AuthError::Provider("bad token".to_string()));
        }
        Ok("guser-1".to_string())
    }
}

fn setup() -> (tempfile::TempDir, Session) {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::open(dir.path().join("session.json"));
    (dir, session)
}

#[test]
fn fresh_session_is_initial() {
    let (_dir, session) = setup();
    assert_eq!(*session.state(), AuthState::Initial);
    assert!(session.user_id().is_none());
}

#[test]
fn request_code_moves_to_code_sent() {
    let (_dir, mut session) = setup();
    let state = session.request_code(&FixedProvider::up(), "9876543210").unwrap();
    assert_eq!(*state, AuthState::CodeSent);
}

#[test]
fn invalid_phone_becomes_error_state() {
    let (_dir, mut session) = setup();
    let state = session.request_code(&FixedProvider::up(), "12ab").unwrap();
    assert!(matches!(state, AuthState::Error { .. }));
}

#[test]
fn provider_failure_becomes_error_state() {
    let (_dir, mut session) = setup();
    let state = session
        .request_code(&FixedProvider::down(), "9876543210")
        .unwrap();
    match state {
        AuthState::Error { message } => assert!(message.contains("service unavailable")),
        other => panic!("expected error state, got {:?}", other),
    }
}

#[test]
fn submit_without_pending_verification_errors() {
    let (_dir, mut session) = setup();
    let state = session.submit_code(&FixedProvider::up(), "123456").unwrap();
    assert!(matches!(state, AuthState::Error { .. }));
}

#[test]
fn full_phone_flow_signs_in() {
    let (_dir, mut session) = setup();
    session.request_code(&FixedProvider::up(), "9876543210").unwrap();
    let state = session.submit_code(&FixedProvider::up(), "123456").unwrap();
    assert_eq!(
        *state,
        AuthState::Success {
            user_id: "user-9".to_string()
        }
    );
    assert_eq!(session.user_id(), Some("user-9"));
}

#[test]
fn wrong_code_surfaces_provider_message() {
    let (_dir, mut session) = setup();
    session.request_code(&FixedProvider::up(), "9876543210").unwrap();
    let state = session.submit_code(&FixedProvider::up(), "000000").unwrap();
    assert!(matches!(state, AuthState::Error { .. }));
}

#[test]
fn google_credential_signs_in() {
    let (_dir, mut session) = setup();
    let state = session
        .sign_in_with_credential(&FixedProvider::up(), "tok-abc")
        .unwrap();
    assert_eq!(
        *state,
        AuthState::Success {
            user_id: "guser-1".to_string()
        }
    );
}

#[test]
fn sign_out_resets_to_initial() {
    let (_dir, mut session) = setup();
    session
        .sign_in_with_credential(&FixedProvider::up(), "tok-abc")
        .unwrap();
    session.sign_out().unwrap();
    assert_eq!(*session.state(), AuthState::Initial);
    assert!(session.user_id().is_none());
}

#[test]
fn session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    {
        let mut session = Session::open(&path);
        session
            .sign_in_with_credential(&FixedProvider::up(), "tok-abc")
            .unwrap();
    }
    let reopened = Session::open(&path);
    assert_eq!(reopened.user_id(), Some("guser-1"));
}

#[test]
fn pending_verification_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    {
        let mut session = Session::open(&path);
        session.request_code(&FixedProvider::up(), "9876543210").unwrap();
    }
    // The verify step may run in a later invocation of the CLI.
    let mut reopened = Session::open(&path);
    assert_eq!(*reopened.state(), AuthState::CodeSent);
    let state = reopened.submit_code(&FixedProvider::up(), "123456").unwrap();
    assert!(matches!(state, AuthState::Success { .. }));
}
