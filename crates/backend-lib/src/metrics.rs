// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const WS_CONNECTION: &str = "ws.connection";
pub const WS_DISCONNECTION: &str = "ws.disconnection";
pub const SUBMIT_VALID: &str = "login.submit.valid";
pub const SUBMIT_INVALID: &str = "login.submit.invalid";
pub const LOGIN_SUCCEEDED: &str = "login.auth.succeeded";
pub const LOGIN_FAILED: &str = "login.auth.failed";
