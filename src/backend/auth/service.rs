/**
 * Identity Workflow
 *
 * `IdentityService` sequences the credential service, the token service and
 * the user store into the three request-scoped operations exposed to
 * handlers: register, issue a session, change a password.
 *
 * # Rules
 *
 * - A duplicate email at registration is `EmailAlreadyExists`; nothing is created
 * - Login never reveals whether the email or the password was wrong, in its
 *   response or its timing: an unknown email is checked against a decoy hash
 * - A password change to the identical password is `SamePassword`
 * - Every other store or primitive failure is `Internal`, detail logged only
 */

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::backend::auth::credentials::CredentialService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{NewUser, UserStore};
use crate::backend::store::StoreError;

/// Hashed once per service; no stored identity can carry it.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-emails";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("email already exists")]
    EmailAlreadyExists,

    /// Unknown email and wrong password alike
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("identity not found")]
    NotFound,

    #[error("new password must differ from the current password")]
    SamePassword,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        IdentityError::Internal(format!("{context}: {err}"))
    }
}

#[derive(Clone)]
pub struct IdentityService {
    users: Arc<dyn UserStore>,
    credentials: CredentialService,
    tokens: Arc<TokenService>,
    decoy_hash: Arc<OnceCell<String>>,
}

impl std::fmt::Debug for IdentityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityService")
            .field("credentials", &self.credentials)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl IdentityService {
    pub fn new(
        users: Arc<dyn UserStore>,
        credentials: CredentialService,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            credentials,
            tokens,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Create an identity and return its id
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        bio: &str,
    ) -> Result<Uuid, IdentityError> {
        let password_hash = self
            .credentials
            .hash(password)
            .await
            .map_err(|e| IdentityError::internal("hashing password", e))?;

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            bio: bio.to_string(),
        };

        match self.users.create_user(new_user).await {
            Ok(id) => {
                tracing::info!(user_id = %id, "registered new identity");
                Ok(id)
            }
            Err(StoreError::DuplicateEmail) => {
                tracing::debug!("registration rejected: email already bound");
                Err(IdentityError::EmailAlreadyExists)
            }
            Err(e) => Err(IdentityError::internal("creating identity", e)),
        }
    }

    /// Check an email/password pair and return the identity id
    pub async fn login(&self, email: &str, password: &str) -> Result<Uuid, IdentityError> {
        let user = match self.users.find_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                self.burn_decoy_verify(password).await;
                tracing::debug!("login rejected: unknown email");
                return Err(IdentityError::InvalidCredentials);
            }
            Err(e) => return Err(IdentityError::internal("looking up identity", e)),
        };

        if !self.credentials.verify(&user.password_hash, password).await {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(IdentityError::InvalidCredentials);
        }

        Ok(user.id)
    }

    /// Spend one bcrypt verification at the service's cost, result discarded
    async fn burn_decoy_verify(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| self.credentials.hash(DECOY_PASSWORD))
            .await;
        match decoy {
            Ok(hash) => {
                self.credentials.verify(hash, password).await;
            }
            Err(e) => tracing::error!("Failed to derive decoy password hash: {}", e),
        }
    }

    /// Log in and mint a session token for the identity
    pub async fn issue_session(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        let user_id = self.login(email, password).await?;
        let token = self
            .tokens
            .issue(user_id)
            .map_err(|e| IdentityError::internal("signing session token", e))?;
        tracing::info!(user_id = %user_id, "issued session token");
        Ok(token)
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        let user = match self.users.find_by_id(user_id).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => return Err(IdentityError::NotFound),
            Err(e) => return Err(IdentityError::internal("looking up identity", e)),
        };

        if !self.credentials.verify(&user.password_hash, current_password).await {
            return Err(IdentityError::InvalidCredentials);
        }

        if current_password == new_password {
            return Err(IdentityError::SamePassword);
        }

        let password_hash = self
            .credentials
            .hash(new_password)
            .await
            .map_err(|e| IdentityError::internal("hashing password", e))?;

        match self.users.update_password_hash(user_id, &password_hash).await {
            Ok(()) => {
                tracing::info!(user_id = %user_id, "password changed");
                Ok(())
            }
            // Deleted between lookup and update.
            Err(StoreError::NotFound) => Err(IdentityError::NotFound),
            Err(e) => Err(IdentityError::internal("updating password hash", e)),
        }
    }
}
