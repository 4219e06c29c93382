//! Feed Post Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::identity::IdentityKey;

/// Strictly increasing post identifier assigned by the feed store
pub type PostId = u64;

/// A post in the shared feed
///
/// Immutable after creation except for `likes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author_key: IdentityKey,
    pub content: String,
    /// Image attached to the post (data URL or remote reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: BTreeSet<IdentityKey>,
}

impl Post {
    pub fn new(id: PostId, author_key: IdentityKey, content: String, media_ref: Option<String>) -> Self {
        Self {
            id,
            author_key,
            content,
            media_ref,
            created_at: Utc::now(),
            likes: BTreeSet::new(),
        }
    }

    /// Whether a viewer with the given friend set may see this post
    pub fn is_visible_to(&self, viewer: &str, viewer_friends: &BTreeSet<IdentityKey>) -> bool {
        self.author_key == viewer || viewer_friends.contains(&self.author_key)
    }

    /// Add or remove a like from `key`, returning whether the post is now liked by it
    pub fn toggle_like(&mut self, key: &str) -> bool {
        if self.likes.remove(key) {
            false
        } else {
            self.likes.insert(key.to_string());
            true
        }
    }
}
