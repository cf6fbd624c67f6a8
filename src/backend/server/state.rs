/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the long-lived services shared by every request:
 * - the identity workflow (credential + token services over the user store)
 * - the token service on its own, for the authentication gate
 * - the user and product stores, as trait objects
 *
 * Everything in it is immutable after construction or internally
 * synchronised, so cloning the state per request is cheap and safe.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for just the part they
 * need, e.g. `State(identity): State<IdentityService>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::IdentityService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::products::listings::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityService,

    /// Shared with `identity`; exposed separately for the auth middleware
    pub tokens: Arc<TokenService>,

    pub users: Arc<dyn UserStore>,

    pub products: Arc<dyn ProductStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for IdentityService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identity.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ProductStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.products.clone()
    }
}
