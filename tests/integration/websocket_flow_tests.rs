// =========================================
// tests/integration/websocket_flow_tests.rs
// =========================================
//! Live form flow over a real WebSocket connection
use crate::test_utils::{spawn_server, RecordingAuth};
use futures_util::{SinkExt, StreamExt};
use login_common::{ClientMessage, FormView, ServerMessage};
use tokio_tungstenite::{connect_async, tungstenite::Message};

type Socket =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn send(ws: &mut Socket, msg: &ClientMessage) -> ServerMessage {
    let json = serde_json::to_string(msg).unwrap();
    ws.send(Message::Text(json.into())).await.unwrap();
    recv(ws).await
}

async fn recv(ws: &mut Socket) -> ServerMessage {
    loop {
        match ws.next().await.expect("connection closed").unwrap() {
            Message::Text(text) => return serde_json::from_str(&text).unwrap(),
            _ => continue,
        }
    }
}

fn view(msg: ServerMessage) -> FormView {
    match msg {
        ServerMessage::FormState(view) => view,
        other => panic!("expected form state, got {other:?}"),
    }
}

#[tokio::test]
async fn test_websocket_login_flow() {
    let auth = RecordingAuth::succeeding();
    let addr = spawn_server(auth.clone()).await;
    let (mut ws, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();

    let state = view(
        send(
            &mut ws,
            &ClientMessage::SetEmail {
                value: "test".to_string(),
            },
        )
        .await,
    );
    assert!(!state.submitted);
    assert!(state.email_error.is_none());

    let state = view(send(&mut ws, &ClientMessage::Submit).await);
    assert!(state.submitted);
    assert_eq!(state.email_error.as_deref(), Some("Please enter a valid email."));
    assert_eq!(
        state.password_error.as_deref(),
        Some("Please enter a valid password.")
    );
    assert!(auth.calls().is_empty());

    send(
        &mut ws,
        &ClientMessage::SetEmail {
            value: "test@test.com".to_string(),
        },
    )
    .await;
    let state = view(
        send(
            &mut ws,
            &ClientMessage::SetPassword {
                value: "123456".to_string(),
            },
        )
        .await,
    );
    assert!(state.valid);
    assert!(state.submitted);
    assert!(state.email_error.is_none());
    assert!(state.password_error.is_none());

    send(&mut ws, &ClientMessage::Submit).await;
    send(&mut ws, &ClientMessage::Submit).await;

    auth.wait_for_calls(2).await;
    assert_eq!(
        auth.calls(),
        vec![
            ("test@test.com".to_string(), "123456".to_string()),
            ("test@test.com".to_string(), "123456".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_malformed_message_keeps_connection_open() {
    let addr = spawn_server(RecordingAuth::succeeding()).await;
    let (mut ws, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();

    ws.send(Message::Text("not json".into())).await.unwrap();
    assert!(matches!(
        recv(&mut ws).await,
        ServerMessage::MalformedMessage { .. }
    ));

    let state = view(send(&mut ws, &ClientMessage::Submit).await);
    assert!(state.submitted);
}

#[tokio::test]
async fn test_connections_do_not_share_forms() {
    let addr = spawn_server(RecordingAuth::succeeding()).await;
    let (mut first, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
    let (mut second, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();

    let submitted = view(send(&mut first, &ClientMessage::Submit).await);
    assert!(submitted.submitted);

    let untouched = view(
        send(
            &mut second,
            &ClientMessage::SetEmail {
                value: "x@y".to_string(),
            },
        )
        .await,
    );
    assert!(!untouched.submitted);
    assert_eq!(untouched.email, "x@y");
}
