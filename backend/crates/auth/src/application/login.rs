//! Login Use Case
//!
//! Authenticates a user and issues a token scoped to the calling
//! application. Read-only: no store write happens on login.

use std::sync::Arc;

use kernel::id::AppId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AppProvider, StorageError, UserProvider};
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Login input
pub struct LoginInput {
    /// Email, used as the user lookup key
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Application (tenant) the token will be scoped to
    pub app_id: i64,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed token; claims carry the user id/email and app id at issuance
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U, A>
where
    U: UserProvider,
    A: AppProvider,
{
    users: Arc<U>,
    apps: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<U, A> LoginUseCase<U, A>
where
    U: UserProvider,
    A: AppProvider,
{
    pub fn new(users: Arc<U>, apps: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            apps,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // An unknown email is reported exactly like a wrong password, so
        // callers cannot tell which addresses are registered.
        let user = match self.users.user_by_email(&input.email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                tracing::warn!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(AuthError::storage("login", e)),
        };

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.pass_hash.verify(&password) {
            tracing::info!(user_id = %user.user_id, "invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        // Application lookup failure is surfaced distinctly; it says nothing
        // about the credentials.
        let app = match self.apps.app_by_id(AppId::from_i64(input.app_id)).await {
            Ok(app) => app,
            Err(StorageError::AppNotFound) => {
                tracing::warn!(app_id = input.app_id, "login with unknown app id");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => return Err(AuthError::storage("login", e)),
        };

        let token = token::issue(&user, &app, self.config.token_ttl)?;

        tracing::info!(
            user_id = %user.user_id,
            app_id = %app.app_id,
            "user logged in"
        );

        Ok(LoginOutput { token })
    }
}
