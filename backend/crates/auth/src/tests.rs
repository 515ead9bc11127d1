//! Unit tests for the auth crate
//!
//! Use cases are exercised against an in-memory store implementing the
//! same capability traits as the PostgreSQL implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kernel::id::{AppId, UserId};
use platform::password::HashedPassword;

use crate::application::config::AuthConfig;
use crate::application::{
    IsAdminInput, IsAdminUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::{App, User};
use crate::domain::repository::{AppProvider, StorageError, UserProvider, UserSaver};
use crate::error::AuthError;
use crate::token;

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Default)]
struct MemInner {
    next_user_id: i64,
    users: HashMap<String, User>,
    apps: HashMap<i64, App>,
}

#[derive(Clone, Default)]
struct MemStore {
    inner: Arc<Mutex<MemInner>>,
}

impl MemStore {
    fn with_app(app_id: i64, secret: &[u8]) -> Self {
        let store = Self::default();
        store.insert_app(app_id, secret);
        store
    }

    fn insert_app(&self, app_id: i64, secret: &[u8]) {
        let mut inner = self.inner.lock().unwrap();
        inner.apps.insert(
            app_id,
            App {
                app_id: AppId::from_i64(app_id),
                name: format!("app-{app_id}"),
                secret: secret.to_vec(),
            },
        );
    }

    fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    fn set_admin(&self, user_id: i64, is_admin: bool) {
        let mut inner = self.inner.lock().unwrap();
        for user in inner.users.values_mut() {
            if user.user_id.as_i64() == user_id {
                user.is_admin = is_admin;
            }
        }
    }
}

impl UserSaver for MemStore {
    async fn save_user(
        &self,
        email: &str,
        pass_hash: &HashedPassword,
    ) -> Result<UserId, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.contains_key(email) {
            return Err(StorageError::UserExists);
        }
        inner.next_user_id += 1;
        let user_id = UserId::from_i64(inner.next_user_id);
        inner.users.insert(
            email.to_string(),
            User {
                user_id,
                email: email.to_string(),
                pass_hash: pass_hash.clone(),
                is_admin: false,
            },
        );
        Ok(user_id)
    }
}

impl UserProvider for MemStore {
    async fn user_by_email(&self, email: &str) -> Result<User, StorageError> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .get(email)
            .cloned()
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .values()
            .find(|u| u.user_id == user_id)
            .map(|u| u.is_admin)
            .ok_or(StorageError::UserNotFound)
    }
}

impl AppProvider for MemStore {
    async fn app_by_id(&self, app_id: AppId) -> Result<App, StorageError> {
        let inner = self.inner.lock().unwrap();
        inner
            .apps
            .get(&app_id.as_i64())
            .cloned()
            .ok_or(StorageError::AppNotFound)
    }
}

// ============================================================================
// Helpers
// ============================================================================

const APP_ID: i64 = 3;
const APP_SECRET: &[u8] = b"test-app-secret";

async fn register(store: &Arc<MemStore>, email: &str, password: &str) -> i64 {
    RegisterUseCase::new(store.clone())
        .execute(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap()
        .user_id
}

fn login_use_case(store: &Arc<MemStore>, ttl: Duration) -> LoginUseCase<MemStore, MemStore> {
    LoginUseCase::new(
        store.clone(),
        store.clone(),
        Arc::new(AuthConfig::with_token_ttl(ttl)),
    )
}

// ============================================================================
// Register + Login
// ============================================================================

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn register_then_login_yields_matching_claims() {
        let store = Arc::new(MemStore::with_app(APP_ID, APP_SECRET));
        let user_id = register(&store, "alice@example.com", "correct horse").await;

        let output = login_use_case(&store, Duration::from_secs(3600))
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
                app_id: APP_ID,
            })
            .await
            .unwrap();

        let claims = token::decode(&output.token, APP_SECRET).unwrap();
        assert_eq!(claims.uid, user_id);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, APP_ID);
    }

    #[tokio::test]
    async fn token_expiry_is_issue_time_plus_ttl() {
        let store = Arc::new(MemStore::with_app(APP_ID, APP_SECRET));
        register(&store, "alice@example.com", "correct horse").await;

        let ttl = Duration::from_secs(900);
        let before = chrono::Utc::now().timestamp();
        let output = login_use_case(&store, ttl)
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
                app_id: APP_ID,
            })
            .await
            .unwrap();
        let after = chrono::Utc::now().timestamp();

        let claims = token::decode(&output.token, APP_SECRET).unwrap();
        assert!(claims.exp >= before + 900);
        assert!(claims.exp <= after + 900);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let store = Arc::new(MemStore::with_app(APP_ID, APP_SECRET));
        register(&store, "alice@example.com", "correct horse").await;

        let use_case = login_use_case(&store, Duration::from_secs(3600));

        let wrong_password = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong password".to_string(),
                app_id: APP_ID,
            })
            .await
            .unwrap_err();

        let unknown_email = use_case
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "correct horse".to_string(),
                app_id: APP_ID,
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.kind(), unknown_email.kind());
    }

    #[tokio::test]
    async fn unknown_app_is_distinct_from_credential_failure() {
        let store = Arc::new(MemStore::with_app(APP_ID, APP_SECRET));
        register(&store, "alice@example.com", "correct horse").await;

        let err = login_use_case(&store, Duration::from_secs(3600))
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
                app_id: 9999,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidAppId));
        assert_ne!(err.kind(), AuthError::InvalidCredentials.kind());
    }

    #[tokio::test]
    async fn empty_secret_app_fails_issuance() {
        let store = Arc::new(MemStore::with_app(APP_ID, b""));
        register(&store, "alice@example.com", "correct horse").await;

        let err = login_use_case(&store, Duration::from_secs(3600))
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
                app_id: APP_ID,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Token(_)));
    }
}

// ============================================================================
// Register
// ============================================================================

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn register_assigns_sequential_store_ids() {
        let store = Arc::new(MemStore::default());
        let first = register(&store, "alice@example.com", "pw-alice").await;
        let second = register(&store, "bob@example.com", "pw-bob").await;
        assert_ne!(first, second);
        assert_eq!(store.user_count(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_fails_and_leaves_store_unchanged() {
        let store = Arc::new(MemStore::default());
        register(&store, "alice@example.com", "pw-alice").await;
        assert_eq!(store.user_count(), 1);

        let err = RegisterUseCase::new(store.clone())
            .execute(RegisterInput {
                email: "alice@example.com".to_string(),
                password: "another password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let store = Arc::new(MemStore::default());

        let err = RegisterUseCase::new(store.clone())
            .execute(RegisterInput {
                email: "alice@example.com".to_string(),
                password: "   ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(store.user_count(), 0);
    }
}

// ============================================================================
// Admin check
// ============================================================================

mod is_admin_tests {
    use super::*;

    #[tokio::test]
    async fn fresh_user_is_not_admin_until_store_flips_flag() {
        let store = Arc::new(MemStore::default());
        let user_id = register(&store, "alice@example.com", "pw-alice").await;

        let use_case = IsAdminUseCase::new(store.clone());

        let output = use_case.execute(IsAdminInput { user_id }).await.unwrap();
        assert!(!output.is_admin);

        // The store flips the flag out of band; the next call must see it
        // because every check is a fresh read.
        store.set_admin(user_id, true);

        let output = use_case.execute(IsAdminInput { user_id }).await.unwrap();
        assert!(output.is_admin);
    }

    #[tokio::test]
    async fn unknown_user_reports_invalid_app_id() {
        let store = Arc::new(MemStore::default());

        let err = IsAdminUseCase::new(store.clone())
            .execute(IsAdminInput { user_id: 12345 })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidAppId));
    }
}
