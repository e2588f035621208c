// ============================
// crates/backend-lib/src/auth/http.rs
// ============================
//! Authentication over HTTP.
use super::{AuthError, AuthService, LoginOutcome};
use crate::config::AuthSettings;
use async_trait::async_trait;
use login_common::LoginRequest;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Posts credentials as JSON to a configured endpoint
#[derive(Clone)]
pub struct HttpAuthService {
    client: Client,
    url: String,
}

impl HttpAuthService {
    pub fn new(settings: &AuthSettings) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: settings.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        debug!(url = %self.url, "sending login request");

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(%status, "login response received");

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(LoginOutcome(serde_json::Value::Null));
        }

        Ok(LoginOutcome(serde_json::from_str(&body)?))
    }
}
