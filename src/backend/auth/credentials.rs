/**
 * Password Credentials
 *
 * This module hashes and verifies passwords with bcrypt.
 *
 * # Security
 *
 * - Work factor is fixed at [`PASSWORD_HASH_COST`] (12); the salt and cost are
 *   embedded in the stored hash
 * - Verification is constant-time (via bcrypt) and yields a plain `bool`:
 *   mismatches and malformed stored hashes are indistinguishable
 * - Plaintext passwords are never logged
 * - Passwords longer than [`MAX_PASSWORD_BYTES`] are refused, never truncated
 *
 * # Scheduling
 *
 * bcrypt is CPU-bound. The async entry points run it on Tokio's blocking
 * pool so a slow hash never stalls unrelated requests. If the caller's future
 * is dropped the result is discarded; nothing has been persisted yet.
 */

use thiserror::Error;

/// bcrypt work factor for every stored password
pub const PASSWORD_HASH_COST: u32 = 12;

/// Longest password bcrypt reads in full
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes and verifies passwords
#[derive(Debug, Clone, Copy)]
pub struct CredentialService {
    cost: u32,
}

impl Default for CredentialService {
    fn default() -> Self {
        Self {
            cost: PASSWORD_HASH_COST,
        }
    }
}

impl CredentialService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different work factor. Only test suites should lower it.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Derive a salted hash of `plaintext`
    ///
    /// Fails with [`CredentialError::Hash`] when `plaintext` exceeds
    /// [`MAX_PASSWORD_BYTES`].
    pub async fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let hashed =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(plaintext, cost))
                .await??;
        Ok(hashed)
    }

    /// Check `plaintext` against a stored hash
    ///
    /// Returns `false` on any failure, never an error.
    pub async fn verify(&self, hash: &str, plaintext: &str) -> bool {
        let hash = hash.to_owned();
        let plaintext = plaintext.to_owned();

        match tokio::task::spawn_blocking(move || verify_blocking(&hash, &plaintext)).await {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            }
        }
    }
}

fn verify_blocking(hash: &str, plaintext: &str) -> bool {
    match bcrypt::non_truncating_verify(plaintext, hash) {
        Ok(matched) => matched,
        Err(bcrypt::BcryptError::Truncation(_)) => false,
        Err(e) => {
            tracing::warn!("Stored password hash could not be checked: {}", e);
            false
        }
    }
}
