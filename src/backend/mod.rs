//! Backend Module
//!
//! This module contains all server-side code for the XFSocial server: a
//! real-time social backend where clients log in by phone number, chat in
//! named rooms, manage friend requests and share a friends-only feed.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`social`** - Identity store, friend graph and feed (plain data, no locks)
//! - **`realtime`** - Connection handles, presence registry, room relay
//! - **`session`** - `SocialHub` (owning context) and per-connection `Session`
//! - **`socket`** - WebSocket upgrade and connection loops
//! - **`server`** - Initialization, application state, configuration loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── social/         - Identities, friend graph, feed
//! ├── realtime/       - Connections, presence, rooms
//! ├── session/        - Hub and session coordinator
//! ├── socket/         - WebSocket transport
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! All social state lives in one `SocialHub` created at startup and shared
//! as `Arc<SocialHub>`. A single `tokio::sync::Mutex` inside the hub
//! serializes every mutation together with the pushes it causes.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Identities, friend graph and feed
pub mod social;

/// Connection addressing and delivery
pub mod realtime;

/// Hub and per-connection sessions
pub mod session;

/// WebSocket transport
pub mod socket;

/// Backend error types
pub mod error;

pub use error::{BackendError, SessionError};
pub use server::create_app;
pub use session::{Session, SocialHub};
