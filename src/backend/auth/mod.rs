//! Authentication Module
//!
//! Credential hashing, session tokens, the identity workflow and its HTTP
//! handlers.
//!
//! # Architecture
//!
//! - **`credentials`** - bcrypt hashing and verification on the blocking pool
//! - **`sessions`** - signed, two-hour session tokens (HS256)
//! - **`clock`** - time source for token issuance and expiry
//! - **`users`** - identity record and the user-store contract
//! - **`service`** - `IdentityService`: register, login, issue session, change password
//! - **`handlers`** - HTTP handlers for the endpoints above
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email, password, bio → password hashed → identity created → id returned
//! 2. **Login**: email and password → hash verified → token returned
//! 3. **Protected requests**: `Authorization: Bearer <token>` → token verified by the
//!    middleware → identity id available to the handler
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at cost 12; plaintext is never stored or logged
//! - Tokens are stateless and expire two hours after issuance; there is no refresh
//! - Login failures and token failures are uniform to the caller

pub mod clock;

pub mod credentials;

pub mod sessions;

pub mod users;

pub mod service;

pub mod handlers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use credentials::{CredentialError, CredentialService, MAX_PASSWORD_BYTES, PASSWORD_HASH_COST};
pub use service::{IdentityError, IdentityService};
pub use sessions::{Claims, TokenError, TokenService, TOKEN_TTL_SECS};
pub use users::{NewUser, ProfileUpdate, User, UserStore};
