/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The `SocialHub` owning all social state
 * - The resolved `ServerConfig`
 *
 * Both are behind `Arc`, so cloning the state per request is cheap.
 *
 * # Example
 *
 * ```rust
 * use std::sync::Arc;
 * use axum::extract::State;
 * use xfsocial::backend::session::SocialHub;
 *
 * async fn handler(State(hub): State<Arc<SocialHub>>) {
 *     let stats = hub.stats().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::session::SocialHub;
use crate::shared::ServerConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Owner of identities, presence, feed and rooms
    pub hub: Arc<SocialHub>,
    /// Resolved server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            hub: Arc::new(SocialHub::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

/// Lets handlers extract `State<Arc<SocialHub>>` directly
impl FromRef<AppState> for Arc<SocialHub> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}

/// Lets handlers extract `State<Arc<ServerConfig>>` directly
impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
