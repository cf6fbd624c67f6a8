/**
 * Login Handler
 *
 * POST /api/v1/auth/login
 *
 * Verifies an email/password pair and returns a signed session token.
 *
 * # Security
 *
 * An unknown email and a wrong password produce the same
 * `400 {"error": "invalid credentials"}`.
 */

use axum::{extract::State, Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::IdentityService;
use crate::backend::error::BackendError;
use crate::backend::validation::ValidatedJson;

/// Login handler
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(identity): State<IdentityService>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let token = identity
        .issue_session(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
