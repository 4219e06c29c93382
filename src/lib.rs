//! XFSocial - Main Library
//!
//! XFSocial is a real-time social messaging backend built with Rust. Clients
//! keep one WebSocket connection open, log in with a phone-derived identity,
//! chat in named rooms, exchange friend requests and share a feed that only
//! friends can see.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with clients
//!   - Socket events (`InboundEvent`, `OutboundEvent`)
//!   - Identities, posts, room chat payloads
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Identity store, friend graph and feed
//!   - Presence registry and room relay
//!   - Session coordinator and WebSocket transport
//!   - Axum router with inspection endpoints
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfsocial::backend::server::init::create_app;
//! use xfsocial::shared::ServerConfig;
//!
//! # async fn example() {
//! let app = create_app(ServerConfig::default());
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All social state is owned by one `SocialHub` and guarded by a single
//! `tokio::sync::Mutex`. Pushes to connections are queued on unbounded
//! channels while that lock is held, so they never wait on client I/O.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
