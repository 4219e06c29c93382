//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the socket protocol and the backend. They carry no server state and are
//! designed for serialization over the WebSocket connection.
//!
//! # Overview
//!
//! - **`event`** - Inbound and outbound socket events
//! - **`social`** - Identities, posts and room chat payloads
//! - **`error`** - Decoding and validation errors
//! - **`config`** - Server configuration and its builder

/// Socket event protocol
pub mod event;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Social data structures
pub mod social;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use error::SharedError;
pub use event::{InboundEvent, LoginRequest, NewPost, OutboundEvent};
