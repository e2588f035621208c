use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Whatever the authentication endpoint answered on success.
///
/// No particular shape is assumed; the value is only logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LoginOutcome(pub serde_json::Value);

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure of a login call. Not classified beyond what the transport reports.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid authentication response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Other(String),
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError>;
}
