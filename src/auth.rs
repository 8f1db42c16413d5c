// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session state and the identity-provider boundary. The provider gates
//! access to the ledger but never touches records: its failures become an
//! `AuthState::Error` surfaced to the user, nothing more.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::store;

/// Numbers are entered without the country code, which is fixed.
const COUNTRY_CODE: &str = "+91";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid phone number '{0}', expected 10 digits")]
    InvalidPhone(String),
    #[error("No verification in progress; request a code first")]
    NoPendingVerification,
    #[error("Identity provider request failed: {0}")]
    Provider(String),
    #[error("Not signed in; run 'pocketledger login' first")]
    SignedOut,
}

/// The closed set of session states. `Loading` only exists between issuing
/// a provider call and observing its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Initial,
    Loading,
    CodeSent,
    Success {
        user_id: String,
    },
    Error {
        message: String,
    },
}

/// External identity collaborator: phone OTP and token-based sign-in.
pub trait IdentityProvider {
    /// Starts phone verification; returns the pending verification id.
    fn request_code(&self, phone: &str) -> Result<String, AuthError>;
    /// Exchanges a received code for a user id.
    fn submit_code(&self, verification_id: &str, code: &str) -> Result<String, AuthError>;
    /// Signs in with an externally obtained credential (e.g. a Google id token).
    fn sign_in_with_credential(&self, id_token: &str) -> Result<String, AuthError>;
}

#[derive(Debug, Deserialize)]
struct RequestCodeResponse {
    verification_id: String,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    user_id: String,
}

/// Identity provider backed by an HTTP endpoint.
pub struct HttpIdentityProvider {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>) -> Result<HttpIdentityProvider> {
        Ok(HttpIdentityProvider {
            base_url: base_url.into(),
            client: crate::utils::http_client()?,
        })
    }

    pub fn from_env() -> Result<HttpIdentityProvider> {
        let base = std::env::var("POCKETLEDGER_AUTH_URL")
            .unwrap_or_else(|_| "https://auth.alphavelocity.com/v1".to_string());
        HttpIdentityProvider::new(base)
    }

    fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, AuthError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        resp.json().map_err(|e| AuthError::Provider(e.to_string()))
    }
}

impl IdentityProvider for HttpIdentityProvider {
    fn request_code(&self, phone: &str) -> Result<String, AuthError> {
        let resp: RequestCodeResponse =
            self.post("otp/request", serde_json::json!({ "phone": phone }))?;
        Ok(resp.verification_id)
    }

    fn submit_code(&self, verification_id: &str, code: &str) -> Result<String, AuthError> {
        let resp: SignInResponse = self.post(
            "otp/verify",
            serde_json::json!({ "verification_id": verification_id, "code": code }),
        )?;
        Ok(resp.user_id)
    }

    fn sign_in_with_credential(&self, id_token: &str) -> Result<String, AuthError> {
        let resp: SignInResponse =
            self.post("oauth/verify", serde_json::json!({ "id_token": id_token }))?;
        Ok(resp.user_id)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(flatten)]
    state: AuthState,
    verification_id: Option<String>,
}

/// The user session, persisted so sign-in survives across invocations.
pub struct Session {
    path: PathBuf,
    state: AuthState,
    verification_id: Option<String>,
}

impl Session {
    pub fn open(path: impl Into<PathBuf>) -> Session {
        let path = path.into();
        let file: SessionFile = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Session {
            path,
            state: file.state,
            verification_id: file.verification_id,
        }
    }

    pub fn open_default() -> Result<Session> {
        Ok(Session::open(store::data_dir()?.join("session.json")))
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user_id(&self) -> Option<&str> {
        match &self.state {
            AuthState::Success { user_id } => Some(user_id),
            _ => None,
        }
    }

    /// Phone OTP step one: validate the number and ask the provider for a code.
    pub fn request_code(
        &mut self,
        provider: &dyn IdentityProvider,
        phone: &str,
    ) -> Result<&AuthState> {
        self.state = AuthState::Loading;
        if !PHONE_RE.is_match(phone) {
            return self.finish(Err(AuthError::InvalidPhone(phone.to_string())));
        }
        let full = format!("{COUNTRY_CODE}{phone}");
        match provider.request_code(&full) {
            Ok(vid) => {
                self.verification_id = Some(vid);
                self.state = AuthState::CodeSent;
                self.persist()?;
                Ok(&self.state)
            }
            Err(e) => self.finish(Err(e)),
        }
    }

    /// Phone OTP step two: exchange the received code for a user id.
    pub fn submit_code(
        &mut self,
        provider: &dyn IdentityProvider,
        code: &str,
    ) -> Result<&AuthState> {
        let Some(vid) = self.verification_id.clone() else {
            return self.finish(Err(AuthError::NoPendingVerification));
        };
        self.state = AuthState::Loading;
        self.finish(provider.submit_code(&vid, code))
    }

    pub fn sign_in_with_credential(
        &mut self,
        provider: &dyn IdentityProvider,
        id_token: &str,
    ) -> Result<&AuthState> {
        self.state = AuthState::Loading;
        self.finish(provider.sign_in_with_credential(id_token))
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.state = AuthState::Initial;
        self.verification_id = None;
        self.persist()
    }

    fn finish(&mut self, outcome: Result<String, AuthError>) -> Result<&AuthState> {
        self.state = match outcome {
            Ok(user_id) => {
                self.verification_id = None;
                AuthState::Success { user_id }
            }
            Err(e) => AuthState::Error {
                message: e.to_string(),
            },
        };
        self.persist()?;
        Ok(&self.state)
    }

    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create session dir {}", dir.display()))?;
        }
        let file = SessionFile {
            state: self.state.clone(),
            verification_id: self.verification_id.clone(),
        };
        fs::write(&self.path, serde_json::to_string(&file)?)
            .with_context(|| format!("Write session at {}", self.path.display()))?;
        Ok(())
    }
}

/// Gate for commands that operate on the ledger.
pub fn require_user(session: &Session) -> Result<&str, AuthError> {
    session.user_id().ok_or(AuthError::SignedOut)
}
