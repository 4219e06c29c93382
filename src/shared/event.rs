/**
 * Socket Event Protocol
 *
 * This module defines the events exchanged over a client's persistent
 * WebSocket connection. Every text frame carries one JSON envelope:
 *
 * ```json
 * {"event": "send_friend_request", "data": "2"}
 * ```
 *
 * Inbound events are decoded into `InboundEvent` and dispatched by an
 * exhaustive match in the session coordinator. Outbound pushes are encoded
 * from `OutboundEvent`.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::social::{Identity, IdentityKey, Post, PostId, RoomMessage, TypingNotice};

/// Payload of `register_login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Identity key
    pub phone: String,
    /// Display name, only used the first time the key is seen
    #[serde(default)]
    pub name: String,
    /// Date of birth, only used the first time the key is seen
    #[serde(default)]
    pub dob: Option<String>,
}

/// Payload of `create_post`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Event sent by a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum InboundEvent {
    /// Register a new identity or log in to an existing one
    RegisterLogin(LoginRequest),
    /// Ask the named identity to become friends
    SendFriendRequest(IdentityKey),
    /// Accept a pending request from the named identity
    AcceptFriend(IdentityKey),
    /// Drop a pending request from the named identity
    DeclineFriend(IdentityKey),
    JoinRoom(String),
    LeaveRoom(String),
    /// Chat message for the other members of a room
    SendMessage(RoomMessage),
    Typing(TypingNotice),
    CreatePost(NewPost),
    /// Toggle the caller's like on a post
    LikePost(PostId),
}

impl InboundEvent {
    /// Decode a text frame
    pub fn parse(text: &str) -> Result<Self, SharedError> {
        let event: Self = serde_json::from_str(text)?;
        event.validate()?;
        Ok(event)
    }

    fn validate(&self) -> Result<(), SharedError> {
        match self {
            Self::RegisterLogin(login) if login.phone.trim().is_empty() => {
                Err(SharedError::validation("phone", "identity key cannot be empty"))
            }
            Self::JoinRoom(room) | Self::LeaveRoom(room) if room.is_empty() => {
                Err(SharedError::validation("room", "room name cannot be empty"))
            }
            Self::SendMessage(message) => message.validate(),
            Self::Typing(notice) if notice.room.is_empty() => {
                Err(SharedError::validation("room", "room name cannot be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Wire name of the event, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegisterLogin(_) => "register_login",
            Self::SendFriendRequest(_) => "send_friend_request",
            Self::AcceptFriend(_) => "accept_friend",
            Self::DeclineFriend(_) => "decline_friend",
            Self::JoinRoom(_) => "join_room",
            Self::LeaveRoom(_) => "leave_room",
            Self::SendMessage(_) => "send_message",
            Self::Typing(_) => "typing",
            Self::CreatePost(_) => "create_post",
            Self::LikePost(_) => "like_post",
        }
    }
}

/// Event pushed to a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum OutboundEvent {
    /// The caller's own record after `register_login`
    LoginSuccess(Identity),
    /// Current friend keys
    FriendUpdate(Vec<IdentityKey>),
    /// Current pending requester keys
    RequestUpdate(Vec<IdentityKey>),
    /// Posts visible to the receiver, newest first
    FeedUpdate(Vec<Post>),
    ReceiveMessage(RoomMessage),
    Typing(TypingNotice),
    /// A single post whose likes changed
    PostUpdate(Post),
}

impl OutboundEvent {
    /// Encode as a text frame
    pub fn to_json(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSuccess(_) => "login_success",
            Self::FriendUpdate(_) => "friend_update",
            Self::RequestUpdate(_) => "request_update",
            Self::FeedUpdate(_) => "feed_update",
            Self::ReceiveMessage(_) => "receive_message",
            Self::Typing(_) => "typing",
            Self::PostUpdate(_) => "post_update",
        }
    }
}
