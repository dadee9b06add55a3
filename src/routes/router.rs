/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Routes
 *
 * - `GET /` - Liveness greeting
 * - `POST /api/login` - Authenticate and issue a session
 * - `POST /api/register` - Create an account
 * - `GET /api/users` - List accounts (behind the token gate)
 *
 * Unknown paths fall through to a plain-text 404. The trace layer logs
 * every request at the HTTP level.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{get_users, login, register};
use crate::middleware::auth::token_gate;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// The token gate is attached with `route_layer`, so it runs only for
/// `/api/users` and never for the fallback.
///
/// # Arguments
///
/// * `app_state` - Application state shared with handlers and middleware
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let gated = Router::new()
        .route("/api/users", axum::routing::get(get_users))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            token_gate,
        ));

    let router = Router::new()
        .route("/", axum::routing::get(root))
        .route("/api/login", axum::routing::post(login))
        .route("/api/register", axum::routing::post(register))
        .merge(gated)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}

/// Liveness greeting for the root path
async fn root() -> &'static str {
    "Helloworld"
}
