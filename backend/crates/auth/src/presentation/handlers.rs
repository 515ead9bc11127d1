//! HTTP Handlers
//!
//! Thin adapters between the wire and the use cases. Input format
//! validation (email shape, non-empty fields) happens here; the use cases
//! only make business-rule decisions.

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    IsAdminInput, IsAdminUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    IsAdminResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserSaver + UserProvider + AppProvider + Clone + Send + Sync + 'static,
{
    pub store: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/sso/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<RegisterResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Clone + Send + Sync + 'static,
{
    let email = Email::new(&req.email).map_err(|e| AuthError::Validation(e.to_string()))?;

    let use_case = RegisterUseCase::new(state.store.clone());

    let output = use_case
        .execute(RegisterInput {
            email: email.as_str().to_string(),
            password: req.password,
        })
        .await?;

    Ok(Json(RegisterResponse {
        user_id: output.user_id,
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/sso/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Clone + Send + Sync + 'static,
{
    // A malformed email can't belong to a registered user; report it the
    // same way as any other credential failure.
    let email = Email::new(&req.email).map_err(|_| AuthError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(state.store.clone(), state.store.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: email.as_str().to_string(),
            password: req.password,
            app_id: req.app_id,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}

// ============================================================================
// Admin check
// ============================================================================

/// GET /api/sso/users/{user_id}/is-admin
pub async fn is_admin<R>(
    State(state): State<AuthAppState<R>>,
    Path(user_id): Path<i64>,
) -> AuthResult<Json<IsAdminResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Clone + Send + Sync + 'static,
{
    let use_case = IsAdminUseCase::new(state.store.clone());

    let output = use_case.execute(IsAdminInput { user_id }).await?;

    Ok(Json(IsAdminResponse {
        is_admin: output.is_admin,
    }))
}
