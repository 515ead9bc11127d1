//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lifetime of issued tokens; expiry is always issuance time + this
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}

impl AuthConfig {
    /// Create config with an explicit token TTL
    pub fn with_token_ttl(token_ttl: Duration) -> Self {
        Self { token_ttl }
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }
}
