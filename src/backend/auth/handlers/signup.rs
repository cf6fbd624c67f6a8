/**
 * Signup Handler
 *
 * POST /api/v1/auth/signup
 *
 * # Registration Process
 *
 * 1. Decode and validate the body (`ValidatedJson`)
 * 2. Hash the password and create the identity (`IdentityService::register`)
 * 3. Return the new id with 201
 *
 * # Errors
 *
 * * `400 Bad Request` - malformed JSON
 * * `422 Unprocessable Entity` - field problems, returned as a map
 * * `409 Conflict` - email already bound to another identity
 * * `500 Internal Server Error` - hashing or store failure
 */

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::backend::auth::service::IdentityService;
use crate::backend::error::BackendError;
use crate::backend::validation::ValidatedJson;

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /api/v1/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "a@x.com",
///   "password": "longpassword1",
///   "bio": "collects old maps"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "id": "123e4567-e89b-12d3-a456-426614174000" }
/// ```
pub async fn signup(
    State(identity): State<IdentityService>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), BackendError> {
    tracing::info!("Signup request for username: {}", request.username);

    let id = identity
        .register(&request.username, &request.email, &request.password, &request.bio)
        .await?;

    Ok((StatusCode::CREATED, Json(SignupResponse { id })))
}
