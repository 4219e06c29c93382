//! Real-time Delivery Module
//!
//! This module addresses live WebSocket connections and pushes events to
//! them.
//!
//! # Architecture
//!
//! - **`connection`** - Connection handles and their outboxes
//! - **`presence`** - Identity key to bound connection directory
//! - **`rooms`** - Room membership and sender-excluding relay
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs         - Module exports and documentation
//! ├── connection.rs  - ConnectionHandle and deliver-if-present
//! ├── presence.rs    - PresenceRegistry (last-writer-wins bindings)
//! └── rooms.rs       - RoomRelay (ephemeral chat rooms)
//! ```
//!
//! # Delivery
//!
//! Every push goes through `ConnectionHandle::deliver`, which queues on an
//! unbounded per-connection channel and reports whether the connection was
//! still there. Pushes are issued while the hub lock is held, so a single
//! connection observes events in the order the state changed.

/// Connection handles and outboxes
pub mod connection;

/// Presence registry
pub mod presence;

/// Room relay
pub mod rooms;

pub use connection::{ConnectionHandle, ConnectionId, Outbox};
pub use presence::{Delivery, PresenceRegistry};
pub use rooms::RoomRelay;
