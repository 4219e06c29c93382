//! Social Backend Module
//!
//! In-memory social state owned by the hub:
//!
//! - **`identity`** - Identity store (register-or-login, lookups)
//! - **`graph`** - Friend-request lifecycle (propose, accept, decline)
//! - **`feed`** - Post storage and visibility
//!
//! None of these types lock internally; `SocialHub` holds them behind a
//! single mutex so graph mutations and feed audience reads are atomic with
//! respect to each other.

pub mod feed;
pub mod graph;
pub mod identity;

pub use feed::{FeedStore, Publication};
pub use graph::Acceptance;
pub use identity::{IdentityStore, Resolution};
