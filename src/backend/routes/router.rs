/**
 * Router Configuration
 *
 * Assembles the API routes under `/api/v1` and applies the service-wide
 * layers:
 *
 * - `TraceLayer` - one span per request with method, path, status, latency
 * - `TimeoutLayer` - requests running longer than the configured timeout get 408
 *
 * Unknown paths return `404 {"error": "route not found"}`.
 */

use std::time::Duration;

use axum::{http::StatusCode, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Version prefix for every API route
pub const API_PREFIX: &str = "/api/v1";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - shared services and stores
/// * `request_timeout` - upper bound on handling time per request
pub fn create_router(app_state: AppState, request_timeout: Duration) -> Router<()> {
    let api = configure_api_routes(&app_state);

    let router = Router::new()
        .nest(API_PREFIX, api)
        .fallback(|| async { BackendError::NotFound("route") });

    with_service_layers(router, request_timeout).with_state(app_state)
}

fn with_service_layers<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
