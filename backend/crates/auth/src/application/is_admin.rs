//! Admin Check Use Case
//!
//! Answers whether a user holds the admin flag. Always a fresh store read;
//! nothing is cached between calls.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::{StorageError, UserProvider};
use crate::error::{AuthError, AuthResult};

/// Admin check input
pub struct IsAdminInput {
    pub user_id: i64,
}

/// Admin check output
#[derive(Debug)]
pub struct IsAdminOutput {
    pub is_admin: bool,
}

/// Admin check use case
pub struct IsAdminUseCase<U>
where
    U: UserProvider,
{
    users: Arc<U>,
}

impl<U> IsAdminUseCase<U>
where
    U: UserProvider,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, input: IsAdminInput) -> AuthResult<IsAdminOutput> {
        let user_id = UserId::from_i64(input.user_id);

        let is_admin = match self.users.is_admin(user_id).await {
            Ok(flag) => flag,
            // An unknown user id surfaces as InvalidAppId. Kept for wire
            // compatibility with existing callers; see DESIGN.md.
            Err(StorageError::UserNotFound) => {
                tracing::warn!(user_id = %user_id, "admin check for unknown user");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => return Err(AuthError::storage("is_admin", e)),
        };

        tracing::info!(user_id = %user_id, is_admin, "admin flag checked");

        Ok(IsAdminOutput { is_admin })
    }
}
