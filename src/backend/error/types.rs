/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 *
 * # Error Types
 *
 * - `BackendError` - Errors returned by HTTP handlers, converted to JSON
 *   responses
 * - `SessionError` - Reasons an inbound socket event changed nothing
 *
 * # Session Errors
 *
 * Session errors are never sent to the client and never close the
 * connection. The socket loop logs them and keeps reading. They exist so
 * callers and tests can tell an applied event from a dropped one:
 * - Events before `register_login`
 * - References to unknown identities or posts
 * - Idempotent repeats (duplicate friend requests, accepts with nothing
 *   pending)
 * - Malformed frames
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::social::PostId;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// ```rust
/// use axum::http::StatusCode;
/// use xfsocial::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., disabled endpoint, invalid request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 404 handler error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
        }
    }
}

/// Why an inbound socket event was dropped
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A state-changing event arrived before `register_login`
    #[error("{event} received before register_login")]
    NotAuthenticated { event: &'static str },

    /// The session already disconnected
    #[error("session is closed")]
    Closed,

    /// The event names an identity the server has never seen
    #[error("unknown identity: {0}")]
    UnknownIdentity(String),

    /// The post does not exist or is not visible to the caller
    #[error("unknown post: {0}")]
    UnknownPost(PostId),

    /// The event was valid but left state unchanged
    #[error("{event} changed nothing")]
    NoChange { event: &'static str },

    /// The frame could not be decoded
    #[error(transparent)]
    Malformed(#[from] SharedError),
}
