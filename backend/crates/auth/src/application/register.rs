//! Register Use Case
//!
//! Creates a new user record. Not idempotent: a second call with the same
//! email fails with `UserExists`.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::repository::{StorageError, UserSaver};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    /// Plaintext password; hashed with a fresh random salt before storage
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// Store-assigned identifier, permanent for this user
    pub user_id: i64,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: UserSaver,
{
    users: Arc<S>,
}

impl<S> RegisterUseCase<S>
where
    S: UserSaver,
{
    pub fn new(users: Arc<S>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // CPU-bound and deliberately slow; the salt ends up embedded in the
        // PHC output so verification needs only the stored hash.
        let pass_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user_id = match self.users.save_user(&input.email, &pass_hash).await {
            Ok(id) => id,
            Err(StorageError::UserExists) => {
                tracing::warn!("registration for already-registered email");
                return Err(AuthError::UserExists);
            }
            Err(e) => return Err(AuthError::storage("register", e)),
        };

        tracing::info!(user_id = %user_id, "user registered");

        Ok(RegisterOutput {
            user_id: user_id.as_i64(),
        })
    }
}
