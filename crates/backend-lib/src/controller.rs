// ============================
// crates/backend-lib/src/controller.rs
// ============================
//! Submission controller for the login form.
//!
//! A [`LoginForm`] owns one [`FormModel`] plus the `submitted` flag and
//! decides when the authentication service gets called. The call itself is
//! spawned onto the runtime: `on_submit` never waits for it, never prevents
//! a second call while the first is in flight, and never changes form state
//! based on its result. Success and failure are only logged.

use crate::auth::AuthService;
use crate::form::FormModel;
use crate::metrics::{LOGIN_FAILED, LOGIN_SUCCEEDED, SUBMIT_INVALID, SUBMIT_VALID};
use crate::validation::FieldKind;
use login_common::FormView;
use metrics::counter;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

/// Handle to a login call started by [`LoginForm::on_submit`].
///
/// Dropping it detaches the call; it keeps running to completion.
#[derive(Debug)]
pub struct PendingLogin {
    handle: JoinHandle<()>,
}

impl PendingLogin {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the in-flight call. Nothing is logged for an aborted call.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait until the call has finished (or was aborted)
    pub async fn finished(self) {
        // An aborted or panicked call has nothing left to report.
        let _ = self.handle.await;
    }
}

/// One login screen instance
pub struct LoginForm {
    id: Uuid,
    form: FormModel,
    submitted: bool,
    auth: Arc<dyn AuthService>,
}

impl LoginForm {
    /// Fresh, empty, unsubmitted form
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            id: Uuid::new_v4(),
            form: FormModel::new(),
            submitted: false,
            auth,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.set_email(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.set_password(value);
    }

    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.form.set_field(kind, value);
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Inline message for `kind`, if one should currently be shown.
    ///
    /// Nothing is shown before the first submission, however invalid the
    /// field is.
    pub fn visible_error(&self, kind: FieldKind) -> Option<&'static str> {
        (self.submitted && !self.form.field(kind).is_valid()).then(|| kind.error_message())
    }

    /// Snapshot for clients that render the form themselves
    pub fn view(&self) -> FormView {
        FormView {
            email: self.form.email().to_string(),
            submitted: self.submitted,
            valid: self.is_valid(),
            email_error: self.visible_error(FieldKind::Email).map(str::to_string),
            password_error: self.visible_error(FieldKind::Password).map(str::to_string),
        }
    }

    /// Handle the user's submit action.
    ///
    /// Marks the form submitted, and when the form is valid starts a login
    /// call with the current email and password. Must be called from within
    /// a tokio runtime.
    pub fn on_submit(&mut self) -> Option<PendingLogin> {
        self.submitted = true;

        if !self.form.is_valid() {
            counter!(SUBMIT_INVALID).increment(1);
            info!(form_id = %self.id, "submission blocked by invalid form");
            return None;
        }

        counter!(SUBMIT_VALID).increment(1);

        let auth = Arc::clone(&self.auth);
        let email = self.form.email().to_string();
        let password = self.form.password().to_string();
        let span = info_span!("login", form_id = %self.id);

        let handle = tokio::spawn(
            async move {
                match auth.login(&email, &password).await {
                    Ok(outcome) => {
                        counter!(LOGIN_SUCCEEDED).increment(1);
                        info!(%outcome, "login succeeded");
                    },
                    Err(e) => {
                        counter!(LOGIN_FAILED).increment(1);
                        error!(error = %e, "login failed");
                    },
                }
            }
            .instrument(span),
        );

        Some(PendingLogin { handle })
    }
}
