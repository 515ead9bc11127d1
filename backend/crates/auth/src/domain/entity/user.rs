//! User Entity
//!
//! Identity record owned by the credential store. Created once on
//! registration, read on every login and admin check, never mutated here;
//! the service only ever holds a transient copy per request.

use kernel::id::UserId;
use platform::password::HashedPassword;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier (unique)
    pub user_id: UserId,
    /// Email address, unique, used as the lookup key
    pub email: String,
    /// Argon2id hash of the password, never the plaintext
    pub pass_hash: HashedPassword,
    /// Admin flag
    pub is_admin: bool,
}
