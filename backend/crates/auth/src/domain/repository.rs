//! Store Capability Traits
//!
//! The credential store is consumed through three narrow capability traits
//! rather than one monolithic storage object, so each use case depends on
//! the minimal operation set it needs and each capability can be mocked
//! independently. Implementation is in the infrastructure layer.

use kernel::id::{AppId, UserId};
use platform::password::HashedPassword;
use thiserror::Error;

use crate::domain::entity::{App, User};

/// Store-level sentinel errors
///
/// A closed set that the application layer pattern-matches and translates
/// into domain error kinds. `Database` and `Decode` are the unclassified
/// remainder and get wrapped with operation context instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserExists,

    #[error("app not found")]
    AppNotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored record could not be decoded: {0}")]
    Decode(String),
}

/// Write capability: persist a new user
#[trait_variant::make(UserSaver: Send)]
pub trait LocalUserSaver {
    /// Persist a new user, returning the store-assigned identifier.
    ///
    /// Fails with [`StorageError::UserExists`] on a duplicate email.
    async fn save_user(&self, email: &str, pass_hash: &HashedPassword)
    -> Result<UserId, StorageError>;
}

/// Read capability: user records and privilege flags
#[trait_variant::make(UserProvider: Send)]
pub trait LocalUserProvider {
    /// Fetch a user by email.
    ///
    /// Fails with [`StorageError::UserNotFound`] for an unknown email.
    async fn user_by_email(&self, email: &str) -> Result<User, StorageError>;

    /// Fetch the admin flag for a user.
    ///
    /// Fails with [`StorageError::UserNotFound`] for an unknown identifier.
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Read capability: application (tenant) records
#[trait_variant::make(AppProvider: Send)]
pub trait LocalAppProvider {
    /// Fetch an application by id.
    ///
    /// Fails with [`StorageError::AppNotFound`] for an unknown identifier.
    async fn app_by_id(&self, app_id: AppId) -> Result<App, StorageError>;
}
