//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation and layers
//! ├── socket_routes.rs  - WebSocket upgrade route
//! └── api_routes.rs     - Liveness, health and debug inspection
//! ```
//!
//! # Route Types
//!
//! - `GET /socket` - WebSocket upgrade into a hub session
//! - `GET /` - Liveness text
//! - `GET /health` - Liveness plus counters
//! - `GET /debug/identities` - Identity dump, when `debug_endpoints` is on

/// Main router creation
pub mod router;

/// WebSocket route
pub mod socket_routes;

/// Inspection endpoints
pub mod api_routes;

pub use router::create_router;
