//! WebSocket transport against a live server on an ephemeral port

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use futures_util::{SinkExt, StreamExt};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tower::ServiceExt;
use xfsocial::backend::routes::create_router;
use xfsocial::backend::server::AppState;
use xfsocial::shared::ServerConfig;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn serve(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn connect(addr: SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}/socket")).await.unwrap();
    client
}

async fn send(client: &mut Client, frame: Value) {
    client.send(Message::text(frame.to_string())).await.unwrap();
}

/// Next text frame decoded as JSON
async fn next_event(client: &mut Client) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("socket closed")
            .unwrap();
        if let Message::Text(text) = frame {
            return serde_json::from_str(text.as_str()).unwrap();
        }
    }
}

async fn login(client: &mut Client, phone: &str, name: &str) -> Vec<Value> {
    send(client, json!({"event": "register_login", "data": {"phone": phone, "name": name}})).await;
    let mut events = Vec::new();
    for _ in 0..4 {
        events.push(next_event(client).await);
    }
    events
}

async fn health(state: &AppState) -> Value {
    let response = create_router(state.clone())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Poll `/health` until `field` reaches `expected`
async fn wait_for(state: &AppState, field: &str, expected: u64) -> Value {
    for _ in 0..100 {
        let json = health(state).await;
        if json[field] == expected {
            return json;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("{field} never reached {expected}");
}

#[tokio::test]
async fn test_login_over_socket_pushes_initial_state() {
    let state = AppState::new(ServerConfig::default());
    let addr = serve(state.clone()).await;
    let mut client = connect(addr).await;

    let events = login(&mut client, "1", "Alice").await;
    let names: Vec<_> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["login_success", "friend_update", "request_update", "feed_update"]);
    assert_eq!(events[0]["data"]["key"], "1");
    assert_eq!(events[0]["data"]["displayName"], "Alice");
    assert_eq!(events[1]["data"], json!([]));
    assert_eq!(events[3]["data"], json!([]));

    assert_eq!(health(&state).await["online"], 1);
}

#[tokio::test]
async fn test_binary_and_malformed_frames_keep_connection_open() {
    let state = AppState::new(ServerConfig::default());
    let addr = serve(state.clone()).await;
    let mut client = connect(addr).await;

    client.send(Message::binary(vec![0u8, 1, 2, 3])).await.unwrap();
    client.send(Message::text("{not json")).await.unwrap();
    send(&mut client, json!({"event": "no_such_event", "data": 1})).await;

    let events = login(&mut client, "1", "Alice").await;
    assert_eq!(events[0]["event"], "login_success");
}

#[tokio::test]
async fn test_room_message_relayed_between_sockets() {
    let state = AppState::new(ServerConfig::default());
    let addr = serve(state.clone()).await;
    let mut alice = connect(addr).await;
    let mut bob = connect(addr).await;
    login(&mut alice, "1", "Alice").await;
    login(&mut bob, "2", "Bob").await;

    // Frames on one socket are handled in order, so the login reply
    // confirms the join before it
    send(&mut alice, json!({"event": "join_room", "data": "general"})).await;
    login(&mut alice, "1", "Alice").await;
    send(&mut bob, json!({"event": "join_room", "data": "general"})).await;
    login(&mut bob, "2", "Bob").await;

    let message = json!({"room": "general", "author": "Alice", "message": "hi", "type": "text", "time": "10:00"});
    send(&mut alice, json!({"event": "send_message", "data": message})).await;

    let received = next_event(&mut bob).await;
    assert_eq!(received["event"], "receive_message");
    assert_eq!(received["data"], message);
}

#[tokio::test]
async fn test_closing_socket_cleans_up_presence_and_rooms() {
    let state = AppState::new(ServerConfig::default());
    let addr = serve(state.clone()).await;
    let mut client = connect(addr).await;

    login(&mut client, "1", "Alice").await;
    send(&mut client, json!({"event": "join_room", "data": "general"})).await;
    let json = wait_for(&state, "rooms", 1).await;
    assert_eq!(json["online"], 1);

    client.close(None).await.unwrap();

    let json = wait_for(&state, "online", 0).await;
    assert_eq!(json["rooms"], 0);
    assert_eq!(json["identities"], 1);
}
