//! Socket Transport Module
//!
//! Adapts axum WebSocket connections to hub sessions. One persistent
//! connection per client carries both inbound events and outbound pushes.

/// WebSocket upgrade and connection loops
pub mod handler;

pub use handler::{handle_socket_upgrade, run_connection};
