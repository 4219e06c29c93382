//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory clients driving a `Session` and reading its outbox
//! - Event inspection helpers


pub use client::*;
