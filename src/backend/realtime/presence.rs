//! Presence Registry
//!
//! Directory from identity key to the connection currently bound to it. At
//! most one connection is bound per key: a later login overwrites the earlier
//! binding, and the superseded connection simply stops being addressed.

use std::collections::HashMap;

use crate::backend::realtime::connection::{ConnectionHandle, ConnectionId};
use crate::shared::social::IdentityKey;
use crate::shared::OutboundEvent;

/// Outcome of a deliver-if-present push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Queued on the bound connection
    Delivered,
    /// No connection is bound to the key
    Offline,
    /// A binding exists but its connection has closed
    Closed,
}

impl Delivery {
    pub fn is_delivered(self) -> bool {
        self == Self::Delivered
    }
}

#[derive(Debug, Default)]
pub struct PresenceRegistry {
    bindings: HashMap<IdentityKey, ConnectionHandle>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `handle`, returning the binding it replaced
    pub fn bind(&mut self, key: &str, handle: ConnectionHandle) -> Option<ConnectionHandle> {
        let previous = self.bindings.insert(key.to_string(), handle);
        if let Some(previous) = &previous {
            tracing::debug!("[Presence] {} rebound, connection {} superseded", key, previous.id());
        }
        previous
    }

    /// Remove the binding for `key` only if it still points at `connection`
    ///
    /// Returns whether a binding was removed. A stale disconnect from a
    /// superseded connection leaves the newer binding in place.
    pub fn unbind(&mut self, key: &str, connection: ConnectionId) -> bool {
        match self.bindings.get(key) {
            Some(bound) if bound.id() == connection => {
                self.bindings.remove(key);
                true
            }
            _ => false,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&ConnectionHandle> {
        self.bindings.get(key)
    }

    /// Push `event` to the connection bound to `key`, if any
    pub fn deliver(&self, key: &str, event: OutboundEvent) -> Delivery {
        let Some(handle) = self.bindings.get(key) else {
            return Delivery::Offline;
        };
        if handle.deliver(event) {
            Delivery::Delivered
        } else {
            Delivery::Closed
        }
    }

    pub fn online_count(&self) -> usize {
        self.bindings.len()
    }
}
