/**
 * Room Chat Payloads
 *
 * Room messages and typing notices are relayed between connections without
 * being interpreted by the server beyond validation. The payload a receiver
 * gets is byte-for-byte the structure the sender emitted, so the sender's
 * optimistic local copy and the receiver's copy agree on author, text and
 * time.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Kind of room message content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomMessageKind {
    #[default]
    Text,
    Image,
    File,
}

/// A chat message addressed to a room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomMessage {
    /// Target room name
    pub room: String,
    /// Author display name as chosen by the sender
    pub author: String,
    /// Text body for `text` messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Base64 data URL for `image` and `file` messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Original file name of an attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: RoomMessageKind,
    /// Client-formatted send time
    pub time: String,
}

impl RoomMessage {
    /// Create a plain text message
    pub fn text(room: impl Into<String>, author: impl Into<String>, message: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            author: author.into(),
            message: Some(message.into()),
            file: None,
            file_name: None,
            kind: RoomMessageKind::Text,
            time: time.into(),
        }
    }

    /// Reject messages without a room or without any content
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.room.is_empty() {
            return Err(SharedError::validation("room", "room name cannot be empty"));
        }
        let has_text = self.message.as_deref().is_some_and(|m| !m.is_empty());
        let has_file = self.file.as_deref().is_some_and(|f| !f.is_empty());
        match self.kind {
            RoomMessageKind::Text if !has_text => Err(SharedError::message("text message has no body")),
            RoomMessageKind::Image | RoomMessageKind::File if !has_file => {
                Err(SharedError::message("attachment message has no file"))
            }
            _ => Ok(()),
        }
    }
}

/// Typing indicator relayed to the other members of a room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypingNotice {
    pub room: String,
    pub author: String,
    pub is_typing: bool,
}
