/**
 * Authentication Middleware
 *
 * This module gates protected routes. It extracts the bearer token from the
 * Authorization header, verifies it with the token service and attaches the
 * typed identity to the request extensions for downstream handlers.
 *
 * # Failure Handling
 *
 * Missing header, wrong scheme, bad signature, wrong algorithm, expiry and a
 * non-UUID subject all fail closed with the same 401. The reason is logged
 * server-side only. The gate never touches a store.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity established by a verified token, valid for one request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Resolve a raw Authorization header value to an identity
pub fn authenticate(
    tokens: &TokenService,
    header: Option<&HeaderValue>,
) -> Result<AuthenticatedUser, BackendError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::Unauthorized
    })?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::Unauthorized
        })?;

    let claims = tokens.verify(token).map_err(|_| {
        tracing::warn!("Rejected bearer token");
        BackendError::Unauthorized
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Token subject is not a user id: {}", e);
        BackendError::Unauthorized
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// Attach with `axum::middleware::from_fn_with_state` on protected routes.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&tokens, request.headers().get(AUTHORIZATION))?;
    tracing::debug!(user_id = %user.user_id, "authenticated request");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the identity attached by [`auth_middleware`]
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })
    }
}
