/**
 * Social Hub
 *
 * The hub is the single owning context for all shared state: identities,
 * presence bindings, the feed and room membership. It is constructed once
 * in `create_app` and handed to every session as `Arc<SocialHub>`.
 *
 * # Locking
 *
 * One `tokio::sync::Mutex` guards the whole `HubState`. Sessions hold the
 * guard for the full read-modify-push of an event, which gives:
 * - both sides of a friend edge change together
 * - a post's audience is read in the same critical section that stores it
 * - pushes to one connection are queued in mutation order
 *
 * Nothing awaits while the guard is held; pushes only enqueue on unbounded
 * channels.
 */
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::backend::realtime::{ConnectionHandle, Outbox, PresenceRegistry, RoomRelay};
use crate::backend::session::coordinator::Session;
use crate::backend::social::{FeedStore, IdentityStore};
use crate::shared::social::Identity;
use crate::shared::ServerConfig;

/// All shared social state
///
/// Fields are public so a session can split the guard into disjoint borrows.
#[derive(Debug)]
pub struct HubState {
    pub identities: IdentityStore,
    pub presence: PresenceRegistry,
    pub feed: FeedStore,
    pub rooms: RoomRelay,
}

/// Counters reported by the health endpoint
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HubStats {
    pub identities: usize,
    pub online: usize,
    pub posts: usize,
    pub rooms: usize,
}

#[derive(Debug)]
pub struct SocialHub {
    state: Mutex<HubState>,
}

impl SocialHub {
    /// Create an empty hub
    pub fn new(avatar_base_url: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(HubState {
                identities: IdentityStore::new(avatar_base_url),
                presence: PresenceRegistry::new(),
                feed: FeedStore::new(),
                rooms: RoomRelay::new(),
            }),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.avatar_base_url.clone())
    }

    /// Open a session for a new connection
    ///
    /// The returned outbox receives every event pushed to the connection.
    pub fn connect(self: &Arc<Self>) -> (Session, Outbox) {
        let (handle, outbox) = ConnectionHandle::open();
        tracing::info!("[Hub] Connection {} opened", handle.id());
        (Session::new(Arc::clone(self), handle), outbox)
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().await
    }

    pub async fn identity(&self, key: &str) -> Option<Identity> {
        self.lock().await.identities.get(key).cloned()
    }

    /// Every identity record, ordered by key
    pub async fn identities_snapshot(&self) -> Vec<Identity> {
        self.lock().await.identities.snapshot()
    }

    pub async fn stats(&self) -> HubStats {
        let state = self.lock().await;
        HubStats {
            identities: state.identities.len(),
            online: state.presence.online_count(),
            posts: state.feed.len(),
            rooms: state.rooms.room_count(),
        }
    }
}
