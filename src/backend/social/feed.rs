//! Feed Store
//!
//! Append-only collection of posts. Insertion order is authoritative: the
//! newest post is the last one stored and the first one returned. Post ids
//! come from a counter, so bursts within the same millisecond still get
//! strictly increasing ids.

use crate::backend::social::identity::IdentityStore;
use crate::shared::social::{IdentityKey, Post, PostId};

/// A freshly stored post and the keys entitled to a live push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub post: Post,
    /// Author plus the author's friends at the moment of publishing
    pub audience: Vec<IdentityKey>,
}

#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
    last_id: PostId,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a post and compute its audience from the current friend graph
    ///
    /// Returns `None` if the author is unknown.
    pub fn publish(
        &mut self,
        identities: &IdentityStore,
        author: &str,
        content: String,
        media_ref: Option<String>,
    ) -> Option<Publication> {
        let author_identity = identities.get(author)?;
        let mut audience = Vec::with_capacity(author_identity.friends.len() + 1);
        audience.push(author_identity.key.clone());
        audience.extend(author_identity.friends.iter().cloned());

        self.last_id += 1;
        let post = Post::new(self.last_id, author_identity.key.clone(), content, media_ref);
        self.posts.push(post.clone());

        Some(Publication { post, audience })
    }

    /// Posts by `viewer` or by the viewer's current friends, newest first
    pub fn visible_posts(&self, identities: &IdentityStore, viewer: &str) -> Vec<Post> {
        let Some(identity) = identities.get(viewer) else {
            return Vec::new();
        };
        self.posts
            .iter()
            .rev()
            .filter(|post| post.is_visible_to(viewer, &identity.friends))
            .cloned()
            .collect()
    }

    /// Toggle `liker`'s like on a post the liker can see
    ///
    /// Returns the updated post and its current audience, or `None` if the
    /// post does not exist or is hidden from the liker.
    pub fn toggle_like(&mut self, identities: &IdentityStore, liker: &str, id: PostId) -> Option<Publication> {
        let liker_identity = identities.get(liker)?;
        let post = self.posts.iter_mut().find(|post| post.id == id)?;
        if !post.is_visible_to(liker, &liker_identity.friends) {
            return None;
        }
        post.toggle_like(liker);

        let author = identities.get(&post.author_key)?;
        let mut audience = vec![author.key.clone()];
        audience.extend(author.friends.iter().cloned());
        Some(Publication {
            post: post.clone(),
            audience,
        })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
