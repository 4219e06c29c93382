/**
 * Session Coordinator
 *
 * One `Session` per live connection. It binds the connection to an identity
 * on `register_login`, routes every later event to the social components
 * and pushes the resulting state to the affected connections.
 *
 * # States
 *
 * ```text
 * Unauthenticated --register_login--> Authenticated --disconnect--> Closed
 *        |                                                            ^
 *        +-------------------------disconnect-------------------------+
 * ```
 *
 * Only `register_login` is accepted while unauthenticated. `Closed` is
 * terminal and rejects everything.
 *
 * # Return Values
 *
 * `handle` returns the number of events queued on any connection, this one
 * included, or the `SessionError` explaining why the event was dropped. A
 * dropped event never changes state and never pushes anything.
 */
use std::sync::Arc;

use crate::backend::error::SessionError;
use crate::backend::realtime::{ConnectionHandle, ConnectionId};
use crate::backend::session::hub::{HubState, SocialHub};
use crate::backend::social::graph;
use crate::shared::social::{IdentityKey, PostId, RoomMessage, TypingNotice};
use crate::shared::{InboundEvent, LoginRequest, NewPost, OutboundEvent};

/// Lifecycle state of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(IdentityKey),
    Closed,
}

pub struct Session {
    hub: Arc<SocialHub>,
    handle: ConnectionHandle,
    state: SessionState,
}

impl Session {
    pub fn new(hub: Arc<SocialHub>, handle: ConnectionHandle) -> Self {
        Self {
            hub,
            handle,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.handle.id()
    }

    /// Identity bound by the last successful `register_login`
    pub fn identity_key(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated(key) => Some(key.as_str()),
            _ => None,
        }
    }

    /// Decode and handle one text frame
    pub async fn handle_frame(&mut self, text: &str) -> Result<usize, SessionError> {
        let event = InboundEvent::parse(text)?;
        self.handle(event).await
    }

    /// Handle one inbound event
    pub async fn handle(&mut self, event: InboundEvent) -> Result<usize, SessionError> {
        if self.state == SessionState::Closed {
            return Err(SessionError::Closed);
        }
        let name = event.name();

        match event {
            InboundEvent::RegisterLogin(login) => Ok(self.register_login(login).await),
            InboundEvent::SendFriendRequest(target) => {
                let key = self.require_auth(name)?;
                self.send_friend_request(&key, &target).await
            }
            InboundEvent::AcceptFriend(requester) => {
                let key = self.require_auth(name)?;
                self.accept_friend(&key, &requester).await
            }
            InboundEvent::DeclineFriend(requester) => {
                let key = self.require_auth(name)?;
                self.decline_friend(&key, &requester).await
            }
            InboundEvent::JoinRoom(room) => {
                self.require_auth(name)?;
                self.join_room(&room).await
            }
            InboundEvent::LeaveRoom(room) => {
                self.require_auth(name)?;
                self.leave_room(&room).await
            }
            InboundEvent::SendMessage(message) => {
                self.require_auth(name)?;
                self.send_message(message).await
            }
            InboundEvent::Typing(notice) => {
                self.require_auth(name)?;
                self.typing(notice).await
            }
            InboundEvent::CreatePost(post) => {
                let key = self.require_auth(name)?;
                self.create_post(&key, post).await
            }
            InboundEvent::LikePost(id) => {
                let key = self.require_auth(name)?;
                self.like_post(&key, id).await
            }
        }
    }

    /// Release presence and room membership; the session becomes `Closed`
    pub async fn disconnect(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        let connection = self.handle.id();
        let mut guard = self.hub.lock().await;
        let HubState { presence, rooms, .. } = &mut *guard;

        if let SessionState::Authenticated(key) = &self.state {
            if !presence.unbind(key, connection) {
                tracing::debug!("[Session] {} already rebound, keeping newer connection", key);
            }
        }
        let left = rooms.leave_all(connection);
        tracing::info!("[Session] Connection {} closed (left {} rooms)", connection, left);
        self.state = SessionState::Closed;
    }

    fn require_auth(&self, event: &'static str) -> Result<IdentityKey, SessionError> {
        match &self.state {
            SessionState::Authenticated(key) => Ok(key.clone()),
            SessionState::Unauthenticated => Err(SessionError::NotAuthenticated { event }),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }

    fn push(&self, event: OutboundEvent) -> usize {
        usize::from(self.handle.deliver(event))
    }

    async fn register_login(&mut self, login: LoginRequest) -> usize {
        let hub = Arc::clone(&self.hub);
        let mut guard = hub.lock().await;
        let HubState {
            identities,
            presence,
            feed,
            ..
        } = &mut *guard;

        if let SessionState::Authenticated(previous) = &self.state {
            if *previous != login.phone {
                presence.unbind(previous, self.handle.id());
            }
        }

        let (identity, resolution) =
            identities.resolve_or_create(&login.phone, &login.name, login.dob.as_deref());
        let identity = identity.clone();
        presence.bind(&identity.key, self.handle.clone());
        tracing::info!(
            "[Session] {} logged in on connection {} ({:?})",
            identity.key,
            self.handle.id(),
            resolution
        );

        let posts = feed.visible_posts(identities, &identity.key);
        let friends = identity.friend_list();
        let pending = identity.pending_list();
        let key = identity.key.clone();

        let mut pushed = self.push(OutboundEvent::LoginSuccess(identity));
        pushed += self.push(OutboundEvent::FriendUpdate(friends));
        pushed += self.push(OutboundEvent::RequestUpdate(pending));
        pushed += self.push(OutboundEvent::FeedUpdate(posts));

        self.state = SessionState::Authenticated(key);
        pushed
    }

    async fn send_friend_request(&self, requester: &str, target: &str) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        let HubState {
            identities, presence, ..
        } = &mut *guard;

        if !identities.contains(target) {
            return Err(SessionError::UnknownIdentity(target.to_string()));
        }
        let pending = graph::propose(identities, requester, target).ok_or(SessionError::NoChange {
            event: "send_friend_request",
        })?;
        tracing::debug!("[Session] {} requested friendship with {}", requester, target);

        let delivery = presence.deliver(target, OutboundEvent::RequestUpdate(pending));
        Ok(usize::from(delivery.is_delivered()))
    }

    async fn accept_friend(&self, accepter: &str, requester: &str) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        let HubState {
            identities, presence, ..
        } = &mut *guard;

        if !identities.contains(requester) {
            return Err(SessionError::UnknownIdentity(requester.to_string()));
        }
        let acceptance = graph::accept(identities, accepter, requester).ok_or(SessionError::NoChange {
            event: "accept_friend",
        })?;
        tracing::info!("[Session] {} and {} are now friends", accepter, requester);

        let mut pushed = self.push(OutboundEvent::FriendUpdate(acceptance.accepter_friends));
        pushed += self.push(OutboundEvent::RequestUpdate(acceptance.accepter_pending));
        let delivery = presence.deliver(requester, OutboundEvent::FriendUpdate(acceptance.requester_friends));
        pushed += usize::from(delivery.is_delivered());
        if let Some(pending) = acceptance.requester_pending {
            let delivery = presence.deliver(requester, OutboundEvent::RequestUpdate(pending));
            pushed += usize::from(delivery.is_delivered());
        }
        Ok(pushed)
    }

    async fn decline_friend(&self, decliner: &str, requester: &str) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        let pending = graph::decline(&mut guard.identities, decliner, requester).ok_or(SessionError::NoChange {
            event: "decline_friend",
        })?;
        tracing::debug!("[Session] {} declined {}", decliner, requester);
        Ok(self.push(OutboundEvent::RequestUpdate(pending)))
    }

    async fn join_room(&self, room: &str) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        if guard.rooms.join(&self.handle, room) {
            tracing::info!("[Session] Connection {} joined room {}", self.handle.id(), room);
        }
        Ok(0)
    }

    async fn leave_room(&self, room: &str) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        if !guard.rooms.leave(self.handle.id(), room) {
            return Err(SessionError::NoChange { event: "leave_room" });
        }
        tracing::info!("[Session] Connection {} left room {}", self.handle.id(), room);
        Ok(0)
    }

    async fn send_message(&self, message: RoomMessage) -> Result<usize, SessionError> {
        let guard = self.hub.lock().await;
        let room = message.room.clone();
        let relayed = guard
            .rooms
            .relay(self.handle.id(), &room, &OutboundEvent::ReceiveMessage(message));
        tracing::debug!("[Session] Message in {} relayed to {} members", room, relayed);
        Ok(relayed)
    }

    async fn typing(&self, notice: TypingNotice) -> Result<usize, SessionError> {
        let guard = self.hub.lock().await;
        let room = notice.room.clone();
        Ok(guard.rooms.relay(self.handle.id(), &room, &OutboundEvent::Typing(notice)))
    }

    async fn create_post(&self, author: &str, post: NewPost) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        let HubState {
            identities,
            presence,
            feed,
            ..
        } = &mut *guard;

        let publication = feed
            .publish(identities, author, post.content, post.image)
            .ok_or_else(|| SessionError::UnknownIdentity(author.to_string()))?;
        tracing::info!(
            "[Session] {} published post {} to an audience of {}",
            author,
            publication.post.id,
            publication.audience.len()
        );

        let mut pushed = 0;
        for member in &publication.audience {
            if presence.lookup(member).is_none() {
                continue;
            }
            let posts = feed.visible_posts(identities, member);
            if presence.deliver(member, OutboundEvent::FeedUpdate(posts)).is_delivered() {
                pushed += 1;
            }
        }
        Ok(pushed)
    }

    async fn like_post(&self, liker: &str, id: PostId) -> Result<usize, SessionError> {
        let mut guard = self.hub.lock().await;
        let HubState {
            identities,
            presence,
            feed,
            ..
        } = &mut *guard;

        let update = feed
            .toggle_like(identities, liker, id)
            .ok_or(SessionError::UnknownPost(id))?;

        let pushed = update
            .audience
            .iter()
            .filter(|member| {
                presence
                    .deliver(member, OutboundEvent::PostUpdate(update.post.clone()))
                    .is_delivered()
            })
            .count();
        Ok(pushed)
    }
}
