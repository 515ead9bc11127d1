//! Token Issuer
//!
//! Builds and signs the access token a successful login returns: an HS256
//! JWT keyed by the target application's secret, so any party holding that
//! secret can verify it by recomputation. Tokens are stateless; nothing is
//! recorded server-side and issued tokens cannot be revoked before expiry.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode as jwt_decode,
    encode as jwt_encode,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entity::{App, User};

/// Token construction/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The application's signing secret is structurally invalid
    #[error("application secret is empty")]
    EmptySecret,

    /// Signing failed
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// Signature or expiry check failed
    #[error("token validation failed: {0}")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

/// Claim set carried by an issued token
///
/// Exactly four fields: subject identifier, subject email, absolute expiry
/// (unix seconds) and the application the token is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject's user id
    pub uid: i64,
    /// Subject's email at issuance time
    pub email: String,
    /// Absolute expiry, unix seconds; always issue time + configured TTL
    pub exp: i64,
    /// Application (tenant) the token is scoped to
    pub app_id: i64,
}

/// Issue a signed token binding `user` to `app` for `ttl`.
///
/// Expiry is computed from wall-clock time at issuance, so two calls with
/// identical logical inputs at different instants produce different tokens.
pub fn issue(user: &User, app: &App, ttl: Duration) -> Result<String, TokenError> {
    if app.secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let claims = Claims {
        uid: user.user_id.as_i64(),
        email: user.email.clone(),
        exp: Utc::now().timestamp() + ttl.as_secs() as i64,
        app_id: app.app_id.as_i64(),
    };

    jwt_encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(&app.secret),
    )
    .map_err(TokenError::Encode)
}

/// Verify a token against an application secret and recover its claims.
///
/// Rejects bad signatures and expired tokens. Expiry is checked without
/// leeway: a token is invalid the second its `exp` passes.
pub fn decode(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    jwt_decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(TokenError::Decode)
}
