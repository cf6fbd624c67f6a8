/**
 * API Route Handlers
 *
 * This module wires the versioned API endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - Session token for an email/password pair
 *
 * ## Protected (`Authorization: Bearer <token>`)
 * - `POST /auth/change-password`
 * - `GET|PUT|DELETE /users/{id}`
 * - `POST|GET /products`, `GET /products/{id}`
 *
 * Protected routes share one `route_layer`, so an unauthenticated request
 * never reaches a handler, and unknown paths still fall through to 404.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{change_password, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::products::{create_product, get_product, list_products};
use crate::backend::server::state::AppState;
use crate::backend::users::{delete_user, get_user, update_user};

/// Routes anyone may call
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Routes behind the authentication gate
fn protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/change-password", post(change_password))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/products", post(create_product).get(list_products))
        .route("/products/{id}", get(get_product))
        .route_layer(from_fn_with_state(app_state.tokens.clone(), auth_middleware))
}

/// Configure API routes
///
/// # Returns
///
/// Router with every API endpoint, ready to be nested under a version prefix
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    public_routes().merge(protected_routes(app_state))
}
