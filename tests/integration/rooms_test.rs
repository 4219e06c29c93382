//! Room membership and message relay

use pretty_assertions::assert_eq;
use xfsocial::backend::SessionError;
use xfsocial::shared::social::{RoomMessage, RoomMessageKind, TypingNotice};
use xfsocial::shared::{InboundEvent, OutboundEvent};

use crate::common::{new_hub, TestClient};

async fn join(client: &mut TestClient, room: &str) {
    client
        .send(InboundEvent::JoinRoom(room.to_string()))
        .await
        .expect("join should succeed");
}

#[tokio::test]
async fn test_message_relayed_to_other_members_without_echo() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut b = TestClient::logged_in(&hub, "2", "Bob").await;
    join(&mut a, "general").await;
    join(&mut b, "general").await;

    let message = RoomMessage::text("general", "Alice", "hi", "10:00");
    assert_eq!(a.send(InboundEvent::SendMessage(message.clone())).await, Ok(1));

    assert_eq!(b.drain(), vec![OutboundEvent::ReceiveMessage(message)]);
    assert!(a.drain().is_empty());
}

#[tokio::test]
async fn test_rooms_are_isolated() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut b = TestClient::logged_in(&hub, "2", "Bob").await;
    let mut c = TestClient::logged_in(&hub, "3", "Carol").await;
    join(&mut a, "x").await;
    join(&mut b, "x").await;
    join(&mut c, "y").await;

    a.send(InboundEvent::SendMessage(RoomMessage::text("x", "Alice", "for x", "10:01")))
        .await
        .unwrap();

    assert_eq!(b.drain().len(), 1);
    assert!(c.drain().is_empty());
}

#[tokio::test]
async fn test_message_to_room_without_other_members_reaches_nobody() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut b = TestClient::logged_in(&hub, "2", "Bob").await;
    join(&mut b, "other").await;

    let message = RoomMessage::text("empty", "Alice", "anyone?", "10:02");
    assert_eq!(a.send(InboundEvent::SendMessage(message)).await, Ok(0));
    assert!(b.drain().is_empty());
}

#[tokio::test]
async fn test_author_is_relayed_as_sent() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut b = TestClient::logged_in(&hub, "2", "Bob").await;
    join(&mut a, "general").await;
    join(&mut b, "general").await;

    let message = RoomMessage::text("general", "Not Alice", "hello", "10:03");
    a.send(InboundEvent::SendMessage(message)).await.unwrap();

    match &b.drain()[0] {
        OutboundEvent::ReceiveMessage(received) => assert_eq!(received.author, "Not Alice"),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_attachment_and_typing_are_relayed() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut b = TestClient::logged_in(&hub, "2", "Bob").await;
    join(&mut a, "general").await;
    join(&mut b, "general").await;

    let attachment = RoomMessage {
        room: "general".into(),
        author: "Alice".into(),
        message: None,
        file: Some("data:application/pdf;base64,AAAA".into()),
        file_name: Some("notes.pdf".into()),
        kind: RoomMessageKind::File,
        time: "10:04".into(),
    };
    a.send(InboundEvent::SendMessage(attachment.clone())).await.unwrap();

    let notice = TypingNotice {
        room: "general".into(),
        author: "Alice".into(),
        is_typing: true,
    };
    assert_eq!(a.send(InboundEvent::Typing(notice.clone())).await, Ok(1));

    assert_eq!(
        b.drain(),
        vec![OutboundEvent::ReceiveMessage(attachment), OutboundEvent::Typing(notice)]
    );
}

#[tokio::test]
async fn test_leave_and_disconnect_stop_delivery() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut b = TestClient::logged_in(&hub, "2", "Bob").await;
    let mut c = TestClient::logged_in(&hub, "3", "Carol").await;
    join(&mut a, "general").await;
    join(&mut b, "general").await;
    join(&mut c, "general").await;

    assert_eq!(b.send(InboundEvent::LeaveRoom("general".into())).await, Ok(0));
    assert_eq!(
        b.send(InboundEvent::LeaveRoom("general".into())).await,
        Err(SessionError::NoChange { event: "leave_room" })
    );
    c.disconnect().await;

    let message = RoomMessage::text("general", "Alice", "still here?", "10:05");
    assert_eq!(a.send(InboundEvent::SendMessage(message)).await, Ok(0));
    assert!(b.drain().is_empty());
}

#[tokio::test]
async fn test_room_events_require_login() {
    let hub = new_hub();
    let mut anonymous = TestClient::connect(&hub);

    let result = anonymous.send(InboundEvent::JoinRoom("general".into())).await;
    assert_eq!(result, Err(SessionError::NotAuthenticated { event: "join_room" }));
    assert_eq!(hub.stats().await.rooms, 0);
}

#[tokio::test]
async fn test_malformed_frames_do_not_close_the_session() {
    let hub = new_hub();
    let mut a = TestClient::logged_in(&hub, "1", "Alice").await;

    let result = a.session.handle_frame("{not json").await;
    assert!(matches!(result, Err(SessionError::Malformed(_))));
    let result = a.session.handle_frame(r#"{"event":"join_room","data":""}"#).await;
    assert!(matches!(result, Err(SessionError::Malformed(_))));

    let result = a.session.handle_frame(r#"{"event":"join_room","data":"general"}"#).await;
    assert_eq!(result, Ok(0));
    assert_eq!(hub.stats().await.rooms, 1);
}
