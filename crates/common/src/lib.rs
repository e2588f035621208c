// ================
// crates/common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between login form clients and the server.
//! This module defines the WebSocket protocol messages and the request body
//! sent to the authentication endpoint.

use serde::{Deserialize, Serialize};

/// Messages sent from client to server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "msgType")]
pub enum ClientMessage {
    /// The email input changed
    /// # Fields
    /// * `value` - Current content of the email input
    SetEmail { value: String },
    /// The password input changed
    /// # Fields
    /// * `value` - Current content of the password input
    SetPassword { value: String },
    /// The user pressed the submit control
    Submit,
}

/// Messages sent from server to client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "msgType")]
pub enum ServerMessage {
    /// Current state of the form after applying a client message
    FormState(FormView),
    /// Error response for malformed messages
    MalformedMessage {
        /// Error description
        err_msg: String,
    },
}

/// What a client needs to redraw the login form.
///
/// The password is deliberately absent; clients already hold it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    /// Current email value
    pub email: String,
    /// Whether a submission has been attempted
    pub submitted: bool,
    /// Aggregate validity of both fields
    pub valid: bool,
    /// Inline email message, present only after submission when invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
    /// Inline password message, present only after submission when invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_error: Option<String>,
}

/// Body posted to the authentication endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
