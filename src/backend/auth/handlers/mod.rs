//! Authentication Handlers Module
//!
//! HTTP handlers for the identity workflow. Each handler receives an already
//! validated payload through `ValidatedJson` and delegates to `IdentityService`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs              - Module exports and documentation
//! ├── types.rs            - Request/response types and their validation rules
//! ├── signup.rs           - POST /auth/signup
//! ├── login.rs            - POST /auth/login
//! └── change_password.rs  - POST /auth/change-password (protected)
//! ```

/// Request and response types
pub mod types;

pub mod signup;

pub mod login;

pub mod change_password;

pub use types::{ChangePasswordRequest, LoginRequest, LoginResponse, SignupRequest, SignupResponse};

pub use change_password::change_password;
pub use login::login;
pub use signup::signup;
