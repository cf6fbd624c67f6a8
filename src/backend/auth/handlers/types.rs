/**
 * Authentication Handler Types
 *
 * Request and response bodies for the authentication endpoints, with the
 * validation rules each request must pass before a handler runs.
 *
 * Request structs use `#[serde(default)]`: a missing field decodes as empty
 * and is reported by validation together with every other problem.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::validation::{
    matches, max_bytes, max_chars, min_chars, not_blank, Evaluator, ValidationContext, Validator,
    EMAIL_RX,
};
use crate::backend::auth::credentials::MAX_PASSWORD_BYTES;

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_BIO_CHARS: usize = 10;
pub const MAX_BIO_CHARS: usize = 255;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    /// Hashed before storage, never echoed
    pub password: String,
    pub bio: String,
}

impl Validator for SignupRequest {
    fn validate(&self, _ctx: &ValidationContext) -> Evaluator {
        let mut eval = Evaluator::new();
        eval.check_field(not_blank(&self.username), "username", "username is required");
        eval.check_field(
            min_chars(&self.username, MIN_USERNAME_CHARS),
            "username",
            "username must be at least 3 characters",
        );
        eval.check_field(
            matches(&self.email, &EMAIL_RX),
            "email",
            "this field must be a valid email",
        );
        eval.check_field(
            min_chars(&self.password, MIN_PASSWORD_CHARS),
            "password",
            "password must be at least 8 characters",
        );
        eval.check_field(
            max_bytes(&self.password, MAX_PASSWORD_BYTES),
            "password",
            "password must be at most 72 bytes",
        );
        eval.check_field(
            min_chars(&self.bio, MIN_BIO_CHARS) && max_chars(&self.bio, MAX_BIO_CHARS),
            "bio",
            "bio must be between 10 and 255 characters",
        );
        eval
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validator for LoginRequest {
    fn validate(&self, _ctx: &ValidationContext) -> Evaluator {
        let mut eval = Evaluator::new();
        eval.check_field(
            matches(&self.email, &EMAIL_RX),
            "email",
            "this field must be a valid email",
        );
        eval.check_field(
            min_chars(&self.password, MIN_PASSWORD_CHARS),
            "password",
            "password must be at least 8 characters",
        );
        eval.check_field(
            max_bytes(&self.password, MAX_PASSWORD_BYTES),
            "password",
            "password must be at most 72 bytes",
        );
        eval
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl Validator for ChangePasswordRequest {
    fn validate(&self, _ctx: &ValidationContext) -> Evaluator {
        let mut eval = Evaluator::new();
        eval.check_field(
            not_blank(&self.current_password),
            "current_password",
            "current password is required",
        );
        eval.check_field(
            min_chars(&self.new_password, MIN_PASSWORD_CHARS),
            "new_password",
            "new password must be at least 8 characters",
        );
        eval.check_field(
            max_bytes(&self.new_password, MAX_PASSWORD_BYTES),
            "new_password",
            "new password must be at most 72 bytes",
        );
        eval
    }
}

/// Returned by signup
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignupResponse {
    pub id: Uuid,
}

/// Returned by login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    /// Bearer token, valid for two hours
    pub token: String,
}
