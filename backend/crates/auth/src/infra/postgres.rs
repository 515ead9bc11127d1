//! PostgreSQL Credential Store
//!
//! Implements the three store capability traits against the `users` and
//! `applications` tables. Sentinel conditions are derived here: a missing
//! row becomes a not-found sentinel, a unique violation on email becomes
//! `UserExists`; everything else passes through as `Database`.

use sqlx::PgPool;

use kernel::id::{AppId, UserId};
use platform::password::HashedPassword;

use crate::domain::entity::{App, User};
use crate::domain::repository::{AppProvider, StorageError, UserProvider, UserSaver};

/// PostgreSQL unique-violation error code
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    email: String,
    pass_hash: String,
    is_admin: bool,
}

impl UserRow {
    fn into_user(self) -> Result<User, StorageError> {
        let pass_hash = HashedPassword::from_phc_string(self.pass_hash)
            .map_err(|e| StorageError::Decode(e.to_string()))?;

        Ok(User {
            user_id: UserId::from_i64(self.user_id),
            email: self.email,
            pass_hash,
            is_admin: self.is_admin,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AppRow {
    app_id: i64,
    name: String,
    secret: Vec<u8>,
}

impl AppRow {
    fn into_app(self) -> App {
        App {
            app_id: AppId::from_i64(self.app_id),
            name: self.name,
            secret: self.secret,
        }
    }
}

// ============================================================================
// Capability implementations
// ============================================================================

impl UserSaver for PgCredentialStore {
    async fn save_user(
        &self,
        email: &str,
        pass_hash: &HashedPassword,
    ) -> Result<UserId, StorageError> {
        let user_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING user_id
            "#,
        )
        .bind(email)
        .bind(pass_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                StorageError::UserExists
            }
            _ => StorageError::Database(e),
        })?;

        Ok(UserId::from_i64(user_id))
    }
}

impl UserProvider for PgCredentialStore {
    async fn user_by_email(&self, email: &str) -> Result<User, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, email, pass_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(StorageError::UserNotFound)?.into_user()
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        let is_admin = sqlx::query_scalar::<_, bool>(
            "SELECT is_admin FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        is_admin.ok_or(StorageError::UserNotFound)
    }
}

impl AppProvider for PgCredentialStore {
    async fn app_by_id(&self, app_id: AppId) -> Result<App, StorageError> {
        let row = sqlx::query_as::<_, AppRow>(
            r#"
            SELECT app_id, name, secret
            FROM applications
            WHERE app_id = $1
            "#,
        )
        .bind(app_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.ok_or(StorageError::AppNotFound)?.into_app())
    }
}
