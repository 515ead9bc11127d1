//! Auth (Credential Issuance) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store capability traits
//! - `application/` - Use cases (login, register, admin check)
//! - `infra/` - PostgreSQL store implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with email + password
//! - Login issuing a signed, time-bounded token scoped to a calling
//!   application (tenant)
//! - Admin-privilege queries
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, salt embedded in the stored hash
//! - Tokens are stateless HS256 JWTs signed with the application's secret;
//!   there is no server-side token record and no revocation
//! - Login does not reveal whether an email is registered: an unknown email
//!   and a wrong password produce the same error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgCredentialStore;
pub use presentation::router::sso_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCredentialStore as CredentialStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
