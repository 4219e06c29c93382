//! Identity Record
//!
//! A person known to the server, keyed by the phone-derived identity key.
//! The same record is pushed to the client in `login_success` and dumped by
//! the debug inspection endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable key identifying a person across sessions (the phone number)
pub type IdentityKey = String;

/// Profile record plus the person's side of the social graph
///
/// `friends` and `pending_requests` are ordered sets so pushes list keys in a
/// stable ascending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Identity key (phone number)
    pub key: IdentityKey,
    /// Name supplied on first login
    pub display_name: String,
    /// Avatar reference derived from the key
    pub avatar_ref: String,
    /// Date of birth supplied on first login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Mutual friends
    #[serde(default)]
    pub friends: BTreeSet<IdentityKey>,
    /// Keys of people who asked to be friends and are awaiting an answer
    #[serde(default)]
    pub pending_requests: BTreeSet<IdentityKey>,
}

impl Identity {
    /// Create a record with an empty friend list and no pending requests
    pub fn new(
        key: impl Into<IdentityKey>,
        display_name: impl Into<String>,
        avatar_ref: impl Into<String>,
        dob: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            avatar_ref: avatar_ref.into(),
            dob,
            friends: BTreeSet::new(),
            pending_requests: BTreeSet::new(),
        }
    }

    pub fn is_friend(&self, key: &str) -> bool {
        self.friends.contains(key)
    }

    pub fn has_pending_from(&self, key: &str) -> bool {
        self.pending_requests.contains(key)
    }

    /// Friend keys in ascending order, as pushed in `friend_update`
    pub fn friend_list(&self) -> Vec<IdentityKey> {
        self.friends.iter().cloned().collect()
    }

    /// Pending requester keys in ascending order, as pushed in `request_update`
    pub fn pending_list(&self) -> Vec<IdentityKey> {
        self.pending_requests.iter().cloned().collect()
    }
}
