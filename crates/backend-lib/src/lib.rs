// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Login form: field validation, submission gating and the HTTP/WebSocket
//! surface that serves it.

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod metrics;
pub mod validation;
pub mod view;
pub mod websocket;
pub mod ws_router;

use crate::auth::{AuthService, HttpAuthService};
use crate::config::Settings;
use crate::error::AppError;
use std::sync::Arc;

pub use crate::controller::{LoginForm, PendingLogin};
pub use crate::form::FormModel;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service every login form calls
    pub auth: Arc<dyn AuthService>,
    /// Settings the server was started with
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state
    pub fn new(auth: Arc<dyn AuthService>, settings: Settings) -> Self {
        Self {
            auth,
            settings: Arc::new(settings),
        }
    }

    /// Create application state talking to the configured HTTP endpoint
    pub fn from_settings(settings: Settings) -> Result<Self, AppError> {
        let auth = Arc::new(HttpAuthService::new(&settings.auth)?);
        Ok(Self::new(auth, settings))
    }
}
