//! Integration tests
//!
//! These drive the hub through sessions and the HTTP router the same way a
//! connected client or an operator would.

pub mod friends_test;
pub mod rooms_test;
pub mod socket_test;
