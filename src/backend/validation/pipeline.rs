/**
 * Decode + Validate Pipeline
 *
 * Every mutating endpoint receives its payload through this pipeline, so no
 * handler logic ever runs against malformed or rule-violating input.
 *
 * # Steps
 *
 * 1. Decode the raw body as JSON into the target type. A decode failure stops
 *    here with [`PipelineError::Decode`]; validation does not run.
 * 2. Run the target's [`Validator`] checks. Any problem fails with
 *    [`PipelineError::Validation`] carrying the full field map.
 * 3. Otherwise return the populated value.
 *
 * [`ValidatedJson`] wraps the same steps as an axum extractor. A body over the
 * router's length limit is rejected with `413` before decoding.
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::validator::{Problems, ValidationContext, Validator};
use crate::backend::error::BackendError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The body is not valid JSON for the target type
    #[error("decode json: {0}")]
    Decode(String),

    /// The body decoded but broke field rules
    #[error("invalid payload: {} problem(s)", .0.len())]
    Validation(Problems),
}

/// Decode `body` into `T` and validate it against `ctx`.
pub fn decode_valid<T>(body: &[u8], ctx: &ValidationContext) -> Result<T, PipelineError>
where
    T: DeserializeOwned + Validator,
{
    let data: T = serde_json::from_slice(body).map_err(|e| PipelineError::Decode(e.to_string()))?;

    let eval = data.validate(ctx);
    if !eval.is_valid() {
        return Err(PipelineError::Validation(eval.into_problems()));
    }

    Ok(data)
}

/// Extractor that yields a decoded and validated `T`
///
/// # Example
///
/// ```rust,ignore
/// async fn signup(ValidatedJson(req): ValidatedJson<SignupRequest>) { /* req is valid */ }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validator,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                BackendError::PayloadTooLarge
            } else {
                BackendError::decode(e.body_text())
            }
        })?;

        let data = decode_valid(&body, &ValidationContext::now())?;
        Ok(ValidatedJson(data))
    }
}
