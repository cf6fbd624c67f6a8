//! User Profiles Module
//!
//! Protected endpoints for reading, updating and deleting an identity's
//! profile. The identity record and store contract live in `auth::users`.
//!
//! - `GET /users/{id}` - any authenticated caller
//! - `PUT /users/{id}` - only the identity itself
//! - `DELETE /users/{id}` - only the identity itself

pub mod types;

pub mod handlers;

pub use handlers::{delete_user, get_user, update_user};
pub use types::{UpdateUserRequest, UserEnvelope, UserResponse};
