//! Session Module
//!
//! Per-connection coordination on top of the shared social state.
//!
//! - **`hub`** - `SocialHub`, the single owning context for identities,
//!   presence, the feed and rooms
//! - **`coordinator`** - `Session`, the per-connection state machine that
//!   dispatches inbound events and fans out the resulting pushes
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use xfsocial::backend::session::SocialHub;
//! use xfsocial::shared::{InboundEvent, LoginRequest};
//!
//! # async fn example() {
//! let hub = Arc::new(SocialHub::new("https://avatars.example/"));
//! let (mut session, mut outbox) = hub.connect();
//! session
//!     .handle(InboundEvent::RegisterLogin(LoginRequest {
//!         phone: "1".into(),
//!         name: "Alice".into(),
//!         dob: None,
//!     }))
//!     .await
//!     .ok();
//! let login_success = outbox.recv().await;
//! # }
//! ```

/// Per-connection state machine
pub mod coordinator;

/// Shared state owner
pub mod hub;

pub use coordinator::{Session, SessionState};
pub use hub::{HubState, HubStats, SocialHub};
