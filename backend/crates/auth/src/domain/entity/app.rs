//! Application (Tenant) Entity
//!
//! A registered caller of the service. Applications are pre-provisioned
//! outside this crate's write path; the core only reads them.

use std::fmt;

use kernel::id::AppId;

/// Application entity
#[derive(Clone)]
pub struct App {
    /// Caller-supplied identifier
    pub app_id: AppId,
    /// Display name
    pub name: String,
    /// Symmetric signing secret. Must be non-empty for token issuance.
    pub secret: Vec<u8>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("app_id", &self.app_id)
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let app = App {
            app_id: AppId::from_i64(1),
            name: "test-app".to_string(),
            secret: b"super-secret".to_vec(),
        };
        let out = format!("{:?}", app);
        assert!(out.contains("REDACTED"));
        assert!(!out.contains("super-secret"));
    }
}
