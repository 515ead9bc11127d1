//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::infra::postgres::PgCredentialStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the SSO router with the PostgreSQL store
pub fn sso_router(store: PgCredentialStore, config: AuthConfig) -> Router {
    sso_router_generic(store, config)
}

/// Create an SSO router for any store implementation
pub fn sso_router_generic<R>(store: R, config: AuthConfig) -> Router
where
    R: UserSaver + UserProvider + AppProvider + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/users/{user_id}/is-admin", get(handlers::is_admin::<R>))
        .with_state(state)
}
