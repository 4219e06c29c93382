/**
 * API Route Handlers
 *
 * Read-only, unauthenticated inspection endpoints. None of them touch the
 * social state beyond reading it.
 *
 * # Routes
 *
 * - `GET /` - Plain-text liveness probe
 * - `GET /health` - Liveness plus hub counters
 * - `GET /debug/identities` - Full identity dump, only when
 *   `debug_endpoints` is enabled
 */

use std::sync::Arc;

use axum::{extract::State, Json, Router};
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::session::{HubStats, SocialHub};
use crate::shared::social::Identity;
use crate::shared::ServerConfig;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub stats: HubStats,
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", axum::routing::get(liveness))
        .route("/health", axum::routing::get(health))
        .route("/debug/identities", axum::routing::get(dump_identities))
}

async fn liveness() -> &'static str {
    "Chat Server is running"
}

async fn health(State(hub): State<Arc<SocialHub>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        stats: hub.stats().await,
    })
}

async fn dump_identities(
    State(hub): State<Arc<SocialHub>>,
    State(config): State<Arc<ServerConfig>>,
) -> Result<Json<Vec<Identity>>, BackendError> {
    if !config.debug_endpoints {
        return Err(BackendError::not_found("debug endpoints are disabled"));
    }
    Ok(Json(hub.identities_snapshot().await))
}
