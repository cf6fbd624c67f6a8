/**
 * Backend Error Types
 *
 * This module defines the boundary error returned by every HTTP handler,
 * extractor and middleware in the server.
 *
 * # Error Categories
 *
 * ## Input errors
 *
 * - `Decode` - the request body is not well-formed JSON for the target type
 * - `PayloadTooLarge` - the body exceeds the server's length limit
 * - `Validation` - the body decoded but failed field rules
 * - `BadRequest` - a malformed path segment or similar
 *
 * ## Identity errors
 *
 * - `InvalidCredentials` - wrong email or wrong password, never distinguished
 * - `EmailAlreadyExists` - uniqueness conflict
 * - `SamePassword` - password change that would not change anything
 * - `Unauthorized` - missing/invalid bearer token, never distinguished
 * - `Forbidden` - authenticated, but acting on another identity's resource
 *
 * ## Lookup and internal errors
 *
 * - `NotFound` - the addressed resource does not exist
 * - `Internal` - collaborator or primitive failure; the detail is logged and
 *   never sent to the client
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::validation::Problems;

/// Generic message sent to clients for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "unexpected internal server error";

/// Boundary error for the HTTP layer
///
/// Each variant maps to exactly one status code. Handlers return
/// `Result<_, BackendError>` and rely on `From` conversions from the module
/// errors, so the translation lives in one place.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Body could not be decoded
    #[error("malformed request body: {message}")]
    Decode {
        /// Decoder detail, logged but not returned
        message: String,
    },

    #[error("request body too large")]
    PayloadTooLarge,

    /// Body decoded but broke one or more field rules
    #[error("invalid payload: {} problem(s)", .0.len())]
    Validation(Problems),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already exists")]
    EmailAlreadyExists,

    /// Lookup miss for the named resource ("user", "product")
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("new password must differ from the current password")]
    SamePassword,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    /// Anything the client cannot act on
    #[error("internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Decode`, `InvalidCredentials`, `SamePassword`, `BadRequest` - 400
    /// - `Unauthorized` - 401
    /// - `Forbidden` - 403
    /// - `NotFound` - 404
    /// - `EmailAlreadyExists` - 409
    /// - `PayloadTooLarge` - 413
    /// - `Validation` - 422
    /// - `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::SamePassword => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Decode and internal details are replaced by generic text.
    pub fn message(&self) -> String {
        match self {
            Self::Decode { .. } => "malformed request body".to_string(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
