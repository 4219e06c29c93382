//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and SessionError
//! └── conversion.rs - IntoResponse for BackendError
//! ```
//!
//! # Error Types
//!
//! - `BackendError` - HTTP handler failures, rendered as JSON responses
//! - `SessionError` - Dropped socket events; logged, never fatal

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, SessionError};
