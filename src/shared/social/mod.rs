//! Social Module
//!
//! Data structures for the social backend:
//!
//! - `Identity` - A person, their profile and their side of the friend graph
//! - `Post` - An entry in the shared feed
//! - `RoomMessage` / `TypingNotice` - Room chat payloads
//!
//! # Usage
//!
//! ```rust
//! use xfsocial::shared::social::{Identity, Post, RoomMessage};
//! ```

pub mod chat;
pub mod identity;
pub mod post;

pub use chat::{RoomMessage, RoomMessageKind, TypingNotice};
pub use identity::{Identity, IdentityKey};
pub use post::{Post, PostId};
