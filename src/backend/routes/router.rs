/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Socket routes (WebSocket upgrade)
 * 2. API routes (liveness, health, debug inspection)
 * 3. Fallback handler (404)
 *
 * # Layers
 *
 * - `TraceLayer` logs each HTTP request through `tracing`
 * - `CorsLayer::permissive()` lets browser clients on any origin connect
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::socket_routes::configure_socket_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_socket_routes(router);
    let router = configure_api_routes(router);

    let router = router.fallback(|| async { BackendError::not_found("404 Not Found") });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
