/**
 * User Model and Store Contract
 *
 * This module defines the identity record and the user-store collaborator the
 * identity workflow depends on. Concrete stores live in `backend::store`.
 *
 * # Contract
 *
 * - `create_user` fails with `StoreError::DuplicateEmail` when the email is
 *   already bound to another identity, and creates nothing in that case
 * - lookups fail with `StoreError::NotFound` on a miss
 * - each call is consistent on its own; uniqueness is enforced by the store
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// User struct representing an identity in the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (at least 3 chars)
    pub username: String,
    /// User email address, unique across identities
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Free-form profile text
    pub bio: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new identity; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
}

/// Replacement profile fields for an existing identity
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub bio: String,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create an identity and return its id
    async fn create_user(&self, new_user: NewUser) -> Result<Uuid, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError>;

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), StoreError>;

    /// Replace profile fields; `DuplicateEmail` if another identity holds the email
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> Result<User, StoreError>;

    /// Delete an identity. Deleting a missing identity is not an error.
    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError>;
}
