/**
 * Connection Handles
 *
 * A `ConnectionHandle` is the server-side address of one live WebSocket. It
 * pairs a unique id with the sending half of that socket's outbox. The
 * socket's writer task drains the outbox and encodes each event as a text
 * frame.
 *
 * # Delivery
 *
 * `deliver` never blocks: the outbox is unbounded, so pushing from inside the
 * hub lock cannot stall on a slow client. The return value reports whether
 * the event was queued (`true`) or the socket is already gone (`false`).
 */
use std::fmt;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::shared::OutboundEvent;

/// Receiving half of a connection's outbox
pub type Outbox = mpsc::UnboundedReceiver<OutboundEvent>;

/// Unique id of one live connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Address of a live connection
///
/// Clones share the same outbox. Two handles are equal when they address the
/// same connection.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    sender: mpsc::UnboundedSender<OutboundEvent>,
}

impl ConnectionHandle {
    /// Create a handle and the outbox its socket writer drains
    pub fn open() -> (Self, Outbox) {
        let (sender, outbox) = mpsc::unbounded_channel();
        let handle = Self {
            id: ConnectionId::new(),
            sender,
        };
        (handle, outbox)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queue an event for this connection
    ///
    /// Returns `false` if the connection's writer has gone away.
    pub fn deliver(&self, event: OutboundEvent) -> bool {
        let name = event.name();
        match self.sender.send(event) {
            Ok(()) => {
                tracing::trace!("[Realtime] Queued {} for connection {}", name, self.id);
                true
            }
            Err(_) => {
                tracing::debug!("[Realtime] Connection {} closed, dropped {}", self.id, name);
                false
            }
        }
    }

    #[cfg(test)]
    fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl PartialEq for ConnectionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConnectionHandle {}
