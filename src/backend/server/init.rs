/**
 * Server Initialization
 *
 * This module builds the Axum application from a resolved configuration.
 *
 * # Initialization Process
 *
 * 1. Create the `SocialHub` (empty identities, presence, feed, rooms)
 * 2. Wrap hub and config in `AppState`
 * 3. Create and configure the router
 *
 * State is process-lifetime only; nothing is restored on startup.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
pub fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing XFSocial backend server");
    if config.debug_endpoints {
        tracing::warn!("Debug endpoints enabled: /debug/identities exposes every profile");
    }

    let app_state = AppState::new(config);
    tracing::info!("Social hub initialized");

    create_router(app_state)
}
