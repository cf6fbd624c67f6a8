/**
 * Profile Handlers
 *
 * All three routes sit behind the auth middleware. The `{id}` path segment
 * is parsed here so a malformed id is a 400 with a stable message rather
 * than the router's plain-text rejection.
 *
 * Deleting an identity also removes its listings.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::backend::auth::users::{ProfileUpdate, UserStore};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::products::listings::ProductStore;
use crate::backend::store::StoreError;
use crate::backend::users::types::{UpdateUserRequest, UserEnvelope};
use crate::backend::validation::ValidatedJson;

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::BadRequest("invalid uuid".to_string()))
}

/// Only the identity itself may change or remove its profile
fn ensure_self(user: &AuthUser, id: Uuid) -> Result<(), BackendError> {
    if user.user_id() != id {
        tracing::warn!(caller = %user.user_id(), requested = %id, "rejected profile change for another identity");
        return Err(BackendError::Forbidden);
    }
    Ok(())
}

pub(crate) fn user_store_error(err: StoreError) -> BackendError {
    match err {
        StoreError::NotFound => BackendError::NotFound("user"),
        other => other.into(),
    }
}

/// GET /users/{id}
pub async fn get_user(
    State(users): State<Arc<dyn UserStore>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UserEnvelope>, BackendError> {
    let id = parse_id(&id)?;
    let user = users.find_by_id(id).await.map_err(user_store_error)?;

    Ok(Json(UserEnvelope { user: user.into() }))
}

/// PUT /users/{id}
pub async fn update_user(
    State(users): State<Arc<dyn UserStore>>,
    caller: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserEnvelope>, BackendError> {
    let id = parse_id(&id)?;
    ensure_self(&caller, id)?;

    let update = ProfileUpdate {
        username: request.username,
        email: request.email,
        bio: request.bio,
    };
    let user = users.update_profile(id, update).await.map_err(user_store_error)?;
    tracing::info!(user_id = %id, "profile updated");

    Ok(Json(UserEnvelope { user: user.into() }))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(users): State<Arc<dyn UserStore>>,
    State(products): State<Arc<dyn ProductStore>>,
    caller: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let id = parse_id(&id)?;
    ensure_self(&caller, id)?;

    users.delete_user(id).await.map_err(user_store_error)?;
    let removed = products.delete_by_seller(id).await?;
    tracing::info!(user_id = %id, listings_removed = removed, "identity deleted");

    Ok(StatusCode::NO_CONTENT)
}
