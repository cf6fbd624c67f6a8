/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-bound identity tokens
 * presented on protected routes as `Authorization: Bearer <token>`.
 *
 * # Token Format
 *
 * A standard three-part JWT signed with HMAC-SHA256. Claims:
 *
 * - `sub` - identity id (UUID, as a string)
 * - `iss` - the configured issuer
 * - `iat` - issued-at, Unix seconds
 * - `exp` - expiry, Unix seconds, always `iat + 2h`
 *
 * # Verification
 *
 * Tokens are stateless: validity is a function of signature, issuer and the
 * clock only. There is no revocation list and no refresh.
 *
 * Every failure (malformed structure, non-HMAC algorithm, bad signature,
 * wrong issuer, expiry) collapses into [`TokenError::InvalidToken`]. The
 * precise reason is logged at debug level and never returned to callers.
 */

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::clock::{Clock, SystemClock};

/// Lifetime of an issued token
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// HMAC algorithms accepted in a token header
const HMAC_FAMILY: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity ID
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Uniform rejection for every verification failure
    #[error("invalid token")]
    InvalidToken,

    /// The signing primitive failed while issuing
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens
///
/// The secret and issuer are fixed at construction and only read afterwards,
/// so one instance is shared by every request.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service signing with `secret`
    ///
    /// # Arguments
    /// * `secret` - HMAC key material
    /// * `issuer` - value written to and required in the `iss` claim
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Create a token for an identity
    ///
    /// # Returns
    /// Signed JWT string valid for two hours from now
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify and decode a token
    ///
    /// # Returns
    /// Decoded claims, or [`TokenError::InvalidToken`] for any failure
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Rejected token header: {:?}", e);
            TokenError::InvalidToken
        })?;

        if !HMAC_FAMILY.contains(&header.alg) {
            tracing::debug!("Rejected token signed with {:?}", header.alg);
            return Err(TokenError::InvalidToken);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_FAMILY.to_vec();
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        // Expiry is checked below against the injected clock.
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {:?}", e);
                TokenError::InvalidToken
            })?
            .claims;

        let now = self.clock.now().timestamp();
        if now > claims.exp {
            tracing::debug!("Rejected expired token for subject {}", claims.sub);
            return Err(TokenError::InvalidToken);
        }
        if claims.iat > now {
            tracing::debug!("Rejected token issued in the future for subject {}", claims.sub);
            return Err(TokenError::InvalidToken);
        }

        Ok(claims)
    }
}
