/**
 * Server Initialization
 *
 * This module assembles the application from an `AppConfig`: stores,
 * credential and token services, the identity workflow, and the router.
 *
 * # Initialization Process
 *
 * 1. Open the database if one is configured (migrations included)
 * 2. Pick the PostgreSQL stores, or the in-memory stores without a database
 * 3. Build the token service from the configured secret and issuer
 * 4. Build `AppState` and the router
 *
 * Tests call [`build_app`] directly with their own stores and a cheap
 * credential service.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::credentials::CredentialService;
use crate::backend::auth::service::IdentityService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::products::listings::ProductStore;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, AppConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryProductStore, MemoryUserStore, PgProductStore, PgUserStore};

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing auction house backend");

    let (users, products): (Arc<dyn UserStore>, Arc<dyn ProductStore>) =
        match load_database(config).await {
            Some(pool) => (
                Arc::new(PgUserStore::new(pool.clone())),
                Arc::new(PgProductStore::new(pool)),
            ),
            None => (
                Arc::new(MemoryUserStore::new()),
                Arc::new(MemoryProductStore::new()),
            ),
        };

    let app = build_app(config, users, products, CredentialService::default());
    tracing::info!(issuer = %config.jwt_issuer, "Router configured");
    app
}

/// Build the shared state from explicit collaborators
pub fn build_state(
    config: &AppConfig,
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
    credentials: CredentialService,
) -> AppState {
    let tokens = Arc::new(TokenService::new(
        config.jwt_secret.as_bytes(),
        config.jwt_issuer.clone(),
    ));
    let identity = IdentityService::new(users.clone(), credentials, tokens.clone());

    AppState {
        identity,
        tokens,
        users,
        products,
    }
}

/// Build the full router from explicit collaborators
pub fn build_app(
    config: &AppConfig,
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
    credentials: CredentialService,
) -> Router<()> {
    let state = build_state(config, users, products, credentials);
    create_router(state, config.request_timeout)
}
