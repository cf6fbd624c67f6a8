/**
 * Change Password Handler
 *
 * POST /api/v1/auth/change-password (protected)
 *
 * Replaces the authenticated identity's password. Responds 204 on success.
 *
 * # Errors
 *
 * * `401 Unauthorized` - no valid bearer token
 * * `400 Bad Request` - current password wrong, or new equals current
 * * `404 Not Found` - the identity behind the token no longer exists
 */

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::handlers::types::ChangePasswordRequest;
use crate::backend::auth::service::IdentityService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::validation::ValidatedJson;

pub async fn change_password(
    State(identity): State<IdentityService>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<StatusCode, BackendError> {
    identity
        .change_password(user.user_id(), &request.current_password, &request.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
