//! Profile request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{MAX_BIO_CHARS, MIN_BIO_CHARS, MIN_USERNAME_CHARS};
use crate::backend::auth::users::User;
use crate::backend::validation::{
    matches, max_chars, min_chars, not_blank, Evaluator, ValidationContext, Validator, EMAIL_RX,
};

/// Full replacement of the editable profile fields
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub bio: String,
}

impl Validator for UpdateUserRequest {
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
            min_chars(&self.bio, MIN_BIO_CHARS) && max_chars(&self.bio, MAX_BIO_CHARS),
            "bio",
            "bio must be between 10 and 255 characters",
        );
        eval
    }
}

/// Public view of an identity; never carries the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserEnvelope {
    pub user: UserResponse,
}
