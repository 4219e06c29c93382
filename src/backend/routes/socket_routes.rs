/**
 * Socket Route Handlers
 *
 * # Routes
 *
 * - `GET /socket` - WebSocket upgrade; every client event and push travels
 *   over this one connection
 */

use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::socket::handle_socket_upgrade;

/// Configure the WebSocket route
pub fn configure_socket_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/socket", axum::routing::get(handle_socket_upgrade))
}
