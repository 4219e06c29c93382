/**
 * Room Relay
 *
 * Transient chat rooms: a room name maps to the connections that joined it.
 * Rooms are created on first join and pruned when their last member leaves
 * or disconnects. Membership is unrelated to the friend graph.
 *
 * Relay excludes the sender, which already shows its own message locally.
 */
use std::collections::HashMap;

use crate::backend::realtime::connection::{ConnectionHandle, ConnectionId};
use crate::shared::OutboundEvent;

#[derive(Debug, Default)]
pub struct RoomRelay {
    rooms: HashMap<String, HashMap<ConnectionId, ConnectionHandle>>,
}

impl RoomRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `handle` to `room`; returns `false` if it was already a member
    pub fn join(&mut self, handle: &ConnectionHandle, room: &str) -> bool {
        self.rooms
            .entry(room.to_string())
            .or_default()
            .insert(handle.id(), handle.clone())
            .is_none()
    }

    /// Remove `connection` from `room`; returns whether it was a member
    pub fn leave(&mut self, connection: ConnectionId, room: &str) -> bool {
        let Some(members) = self.rooms.get_mut(room) else {
            return false;
        };
        let removed = members.remove(&connection).is_some();
        if members.is_empty() {
            self.rooms.remove(room);
        }
        removed
    }

    /// Remove `connection` from every room, returning how many it left
    pub fn leave_all(&mut self, connection: ConnectionId) -> usize {
        let mut left = 0;
        self.rooms.retain(|_, members| {
            if members.remove(&connection).is_some() {
                left += 1;
            }
            !members.is_empty()
        });
        left
    }

    /// Push `event` to every member of `room` except `sender`
    ///
    /// Returns the number of members the event was queued for. Unknown rooms
    /// relay to nobody.
    pub fn relay(&self, sender: ConnectionId, room: &str, event: &OutboundEvent) -> usize {
        let Some(members) = self.rooms.get(room) else {
            return 0;
        };
        members
            .values()
            .filter(|member| member.id() != sender)
            .filter(|member| member.deliver(event.clone()))
            .count()
    }

    #[cfg(test)]
    fn is_member(&self, connection: ConnectionId, room: &str) -> bool {
        self.rooms
            .get(room)
            .is_some_and(|members| members.contains_key(&connection))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
