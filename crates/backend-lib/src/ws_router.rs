// ============================
// crates/backend-lib/src/ws_router.rs
// ============================
//! HTTP and WebSocket routes serving the login form.
use crate::controller::LoginForm;
use crate::error::AppError;
use crate::view;
use crate::websocket::WebSocketHandler;
use crate::AppState;
use axum::{
    extract::{
        rejection::FormRejection,
        ws::{Message, WebSocket, WebSocketUpgrade},
        Form, State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use futures_util::{Sink, SinkExt, StreamExt};
use login_common::{ClientMessage, ServerMessage};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Fields posted by the HTML form
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/ws", get(ws_handler))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A fresh, unsubmitted form
async fn show_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let form = LoginForm::new(Arc::clone(&state.auth));
    Html(view::login_page(&form).into_string())
}

/// Plain HTML submission: apply the posted values to a fresh form and submit it.
///
/// The login call is not awaited; the page is rendered right away.
async fn submit_form(
    State(state): State<Arc<AppState>>,
    credentials: Result<Form<Credentials>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(credentials) = credentials.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let mut form = LoginForm::new(Arc::clone(&state.auth));
    form.set_email(credentials.email);
    form.set_password(credentials.password);
    // The call runs detached from this request.
    drop(form.on_submit());

    Ok(Html(view::login_page(&form).into_string()))
}

/// Handler for WebSocket connections
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_connection(socket, state))
}

async fn handle_connection(socket: WebSocket, state: Arc<AppState>) {
    let (mut tx, mut rx) = socket.split();
    let mut handler = WebSocketHandler::new(state);

    info!(form_id = %handler.form_id(), "login form connected");

    while let Some(Ok(message)) = rx.next().await {
        let reply = match message {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => handler.handle_message(client_msg).0,
                Err(e) => {
                    debug!(error = %e, "malformed client message");
                    handler.malformed(&e)
                },
            },
            Message::Close(_) => break,
            _ => continue,
        };

        if let Err(e) = send_message(&mut tx, &reply).await {
            warn!(error = %e, "failed to send reply");
            break;
        }
    }

    info!(form_id = %handler.form_id(), "login form disconnected");
}

async fn send_message<S>(tx: &mut S, msg: &ServerMessage) -> Result<(), AppError>
where
    S: Sink<Message, Error = axum::Error> + Unpin,
{
    let json = serde_json::to_string(msg)?;
    tx.send(Message::Text(json.into()))
        .await
        .map_err(|e| AppError::Internal(format!("WebSocket send failed: {e}")))
}
