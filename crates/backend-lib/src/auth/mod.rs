// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

mod http;
mod service;

pub use http::HttpAuthService;
pub use service::{AuthError, AuthService, LoginOutcome};
