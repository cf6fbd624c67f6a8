/**
 * Error Conversion
 *
 * This module turns `BackendError` into HTTP responses and lifts the
 * module-level errors (identity workflow, stores, pipeline) into it.
 *
 * # Response Format
 *
 * Validation failures return the problem map itself:
 * ```json
 * { "email": "this field must be a valid email" }
 * ```
 *
 * Every other error returns:
 * ```json
 * { "error": "invalid credentials" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::service::IdentityError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;
use crate::backend::validation::PipelineError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            BackendError::Validation(problems) => (status, Json(problems)).into_response(),
            other => {
                match &other {
                    BackendError::Internal(detail) => {
                        tracing::error!(error = %detail, "request failed with internal error");
                    }
                    BackendError::Decode { message } => {
                        tracing::debug!(error = %message, "rejected malformed request body");
                    }
                    _ => {}
                }
                let body = serde_json::json!({ "error": other.message() });
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<PipelineError> for BackendError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Decode(message) => BackendError::decode(message),
            PipelineError::Validation(problems) => BackendError::Validation(problems),
        }
    }
}

impl From<IdentityError> for BackendError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::EmailAlreadyExists => BackendError::EmailAlreadyExists,
            IdentityError::InvalidCredentials => BackendError::InvalidCredentials,
            IdentityError::NotFound => BackendError::NotFound("user"),
            IdentityError::SamePassword => BackendError::SamePassword,
            IdentityError::Internal(detail) => BackendError::Internal(detail),
        }
    }
}

/// Store errors reaching a handler directly (profile and product routes).
///
/// Handlers that know which resource they looked up map `NotFound` themselves.
impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => BackendError::EmailAlreadyExists,
            StoreError::NotFound => BackendError::NotFound("record"),
            StoreError::Database(e) => BackendError::internal(e.to_string()),
        }
    }
}
