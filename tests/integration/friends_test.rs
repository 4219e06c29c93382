//! Friend request and acceptance flows between connected clients

use pretty_assertions::assert_eq;
use xfsocial::backend::SessionError;
use xfsocial::shared::{InboundEvent, OutboundEvent};

use crate::common::{event_names, new_hub, TestClient};

#[tokio::test]
async fn test_request_then_accept_updates_both_sides() {
    let hub = new_hub();
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;

    let pushed = alice.send(InboundEvent::SendFriendRequest("2".into())).await;
    assert_eq!(pushed, Ok(1));
    assert_eq!(bob.drain(), vec![OutboundEvent::RequestUpdate(vec!["1".into()])]);
    assert!(alice.drain().is_empty());

    let pushed = bob.send(InboundEvent::AcceptFriend("1".into())).await;
    assert_eq!(pushed, Ok(3));
    assert_eq!(
        bob.drain(),
        vec![
            OutboundEvent::FriendUpdate(vec!["1".into()]),
            OutboundEvent::RequestUpdate(vec![]),
        ]
    );
    assert_eq!(alice.drain(), vec![OutboundEvent::FriendUpdate(vec!["2".into()])]);

    let alice_record = hub.identity("1").await.unwrap();
    let bob_record = hub.identity("2").await.unwrap();
    assert!(alice_record.is_friend("2"));
    assert!(bob_record.is_friend("1"));
    assert!(bob_record.pending_requests.is_empty());
}

#[tokio::test]
async fn test_duplicate_request_changes_nothing() {
    let hub = new_hub();
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;

    alice.send(InboundEvent::SendFriendRequest("2".into())).await.unwrap();
    bob.drain();

    let again = alice.send(InboundEvent::SendFriendRequest("2".into())).await;
    assert_eq!(again, Err(SessionError::NoChange { event: "send_friend_request" }));
    assert!(bob.drain().is_empty());

    let bob_record = hub.identity("2").await.unwrap();
    assert_eq!(bob_record.pending_list(), vec!["1".to_string()]);
}

#[tokio::test]
async fn test_request_to_unknown_or_self_is_ignored() {
    let hub = new_hub();
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;

    let unknown = alice.send(InboundEvent::SendFriendRequest("404".into())).await;
    assert_eq!(unknown, Err(SessionError::UnknownIdentity("404".into())));

    let own = alice.send(InboundEvent::SendFriendRequest("1".into())).await;
    assert_eq!(own, Err(SessionError::NoChange { event: "send_friend_request" }));

    let record = hub.identity("1").await.unwrap();
    assert!(record.friends.is_empty());
    assert!(record.pending_requests.is_empty());
    assert!(hub.identity("404").await.is_none());
}

#[tokio::test]
async fn test_request_to_offline_target_is_seen_at_next_login() {
    let hub = new_hub();
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;
    bob.disconnect().await;

    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    assert_eq!(alice.send(InboundEvent::SendFriendRequest("2".into())).await, Ok(0));

    let mut bob = TestClient::connect(&hub);
    bob.login("2", "Bob").await.unwrap();
    let events = bob.drain();
    assert_eq!(events[2], OutboundEvent::RequestUpdate(vec!["1".into()]));
}

#[tokio::test]
async fn test_crossed_requests_clear_requester_pending_list() {
    let hub = new_hub();
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;

    alice.send(InboundEvent::SendFriendRequest("2".into())).await.unwrap();
    bob.send(InboundEvent::SendFriendRequest("1".into())).await.unwrap();
    alice.drain();
    bob.drain();

    assert_eq!(bob.send(InboundEvent::AcceptFriend("1".into())).await, Ok(4));
    assert_eq!(
        alice.drain(),
        vec![
            OutboundEvent::FriendUpdate(vec!["2".into()]),
            OutboundEvent::RequestUpdate(vec![]),
        ]
    );
    assert!(hub.identity("1").await.unwrap().pending_requests.is_empty());
}

#[tokio::test]
async fn test_accept_without_request_is_ignored() {
    let hub = new_hub();
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;

    let result = bob.send(InboundEvent::AcceptFriend("1".into())).await;
    assert_eq!(result, Err(SessionError::NoChange { event: "accept_friend" }));
    assert!(alice.drain().is_empty());
    assert!(bob.drain().is_empty());
    assert!(hub.identity("2").await.unwrap().friends.is_empty());
}

#[tokio::test]
async fn test_decline_clears_request_without_friendship() {
    let hub = new_hub();
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;

    alice.send(InboundEvent::SendFriendRequest("2".into())).await.unwrap();
    bob.drain();

    assert_eq!(bob.send(InboundEvent::DeclineFriend("1".into())).await, Ok(1));
    assert_eq!(bob.drain(), vec![OutboundEvent::RequestUpdate(vec![])]);
    assert!(alice.drain().is_empty());
    assert!(!hub.identity("1").await.unwrap().is_friend("2"));

    // A declined request may be proposed again
    assert_eq!(alice.send(InboundEvent::SendFriendRequest("2".into())).await, Ok(1));
}

#[tokio::test]
async fn test_pushes_arrive_in_commit_order() {
    let hub = new_hub();
    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;
    let mut alice = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut carol = TestClient::logged_in(&hub, "3", "Carol").await;

    alice.send(InboundEvent::SendFriendRequest("2".into())).await.unwrap();
    carol.send(InboundEvent::SendFriendRequest("2".into())).await.unwrap();

    assert_eq!(
        bob.drain(),
        vec![
            OutboundEvent::RequestUpdate(vec!["1".into()]),
            OutboundEvent::RequestUpdate(vec!["1".into(), "3".into()]),
        ]
    );
}

#[tokio::test]
async fn test_stale_disconnect_keeps_newer_connection() {
    let hub = new_hub();
    let mut first = TestClient::logged_in(&hub, "1", "Alice").await;
    let mut second = TestClient::logged_in(&hub, "1", "Alice").await;
    first.disconnect().await;

    let mut bob = TestClient::logged_in(&hub, "2", "Bob").await;
    assert_eq!(bob.send(InboundEvent::SendFriendRequest("1".into())).await, Ok(1));
    assert_eq!(event_names(&second.drain()), vec!["request_update"]);
    assert!(first.drain().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_keep_friendships_symmetric() {
    let hub = new_hub();
    let keys: Vec<String> = (0..8).map(|i| format!("+1555000{i}")).collect();

    let mut clients = Vec::new();
    for key in &keys {
        clients.push(TestClient::logged_in(&hub, key, key).await);
    }

    // Every client proposes to every other client and then accepts everyone
    let mut tasks = Vec::new();
    for (index, mut client) in clients.into_iter().enumerate() {
        let keys = keys.clone();
        tasks.push(tokio::spawn(async move {
            for (other, key) in keys.iter().enumerate() {
                if other != index {
                    let _ = client.send(InboundEvent::SendFriendRequest(key.clone())).await;
                }
            }
            for (other, key) in keys.iter().enumerate() {
                if other != index {
                    let _ = client.send(InboundEvent::AcceptFriend(key.clone())).await;
                }
            }
            client
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let snapshot = hub.identities_snapshot().await;
    for identity in &snapshot {
        assert!(!identity.is_friend(&identity.key));
        for friend in &identity.friends {
            let other = snapshot.iter().find(|i| &i.key == friend).unwrap();
            assert!(other.is_friend(&identity.key), "{} -> {} is one-sided", identity.key, friend);
        }
        for requester in &identity.pending_requests {
            assert!(!identity.is_friend(requester));
        }
    }
}
