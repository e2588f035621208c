// ==================
// crates/backend-lib/src/websocket.rs
// ==================
//! WebSocket Handler Module
//!
//! One [`WebSocketHandler`] is created per connection and owns that
//! connection's [`LoginForm`]. Messages are applied strictly in arrival order
//! and every message is answered with the resulting form state. A handler
//! counts as one open connection in the metrics from creation until drop.

use crate::controller::{LoginForm, PendingLogin};
use crate::metrics::{WS_CONNECTION, WS_DISCONNECTION};
use crate::AppState;
use login_common::{ClientMessage, ServerMessage};
use metrics::counter;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// WebSocket handler for processing messages
pub struct WebSocketHandler {
    form: LoginForm,
}

impl WebSocketHandler {
    pub fn new(state: Arc<AppState>) -> Self {
        counter!(WS_CONNECTION).increment(1);
        Self {
            form: LoginForm::new(Arc::clone(&state.auth)),
        }
    }

    pub fn form_id(&self) -> Uuid {
        self.form.id()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Apply one client message and report the resulting state.
    ///
    /// A started login call is returned alongside so callers may observe it;
    /// the connection loop simply drops it.
    pub fn handle_message(&mut self, msg: ClientMessage) -> (ServerMessage, Option<PendingLogin>) {
        let pending = match msg {
            ClientMessage::SetEmail { value } => {
                self.form.set_email(value);
                None
            },
            ClientMessage::SetPassword { value } => {
                self.form.set_password(value);
                None
            },
            ClientMessage::Submit => self.form.on_submit(),
        };

        debug!(form_id = %self.form.id(), valid = self.form.is_valid(), "client message applied");

        (ServerMessage::FormState(self.form.view()), pending)
    }

    /// Reply for text that is not a valid [`ClientMessage`]
    pub fn malformed(&self, err: &serde_json::Error) -> ServerMessage {
        ServerMessage::MalformedMessage {
            err_msg: err.to_string(),
        }
    }
}

impl Drop for WebSocketHandler {
    fn drop(&mut self) {
        counter!(WS_DISCONNECTION).increment(1);
    }
}
