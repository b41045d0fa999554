//! Authenticator Configuration
//! Mission: Carry signing and seeding settings as an explicit struct

use anyhow::{bail, Result};
use chrono::Duration;

/// Default token lifetime in minutes.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Construction-time configuration for the authenticator.
///
/// Filled in by the embedding process (CLI flags, config file, secret
/// manager - not this crate's concern) and handed over once at startup.
/// The default admin hash seeds the first account so a fresh deployment
/// is reachable; see [`crate::store::MemoryUserStore::seeded`].
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub default_admin_username: String,
    pub default_admin_password_hash: String,
}

impl AuthConfig {
    pub fn new(
        jwt_secret: impl Into<String>,
        default_admin_password_hash: impl Into<String>,
    ) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
            default_admin_username: "admin".to_string(),
            default_admin_password_hash: default_admin_password_hash.into(),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Reject unusable configuration.
    ///
    /// A missing or empty signing secret is a startup failure, never a
    /// per-request one.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            bail!("jwt secret must be non-empty");
        }
        if self.default_admin_username.trim().is_empty() {
            bail!("default admin username must be non-empty");
        }
        if self.default_admin_password_hash.trim().is_empty() {
            bail!("default admin password hash must be non-empty");
        }
        if self.token_ttl.num_seconds() <= 0 {
            bail!(
                "token ttl must be positive, got {}s",
                self.token_ttl.num_seconds()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::new("secret", "$2b$04$hash");
        assert_eq!(config.token_ttl.num_seconds(), 30 * 60);
        assert_eq!(config.default_admin_username, "admin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = AuthConfig::new("", "$2b$04$hash");
        assert!(config.validate().is_err());

        let config = AuthConfig::new("   ", "$2b$04$hash");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_admin_hash_rejected() {
        let config = AuthConfig::new("secret", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let config = AuthConfig::new("secret", "$2b$04$hash").with_token_ttl(Duration::zero());
        assert!(config.validate().is_err());

        let config =
            AuthConfig::new("secret", "$2b$04$hash").with_token_ttl(Duration::seconds(-5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ttl_override() {
        let config =
            AuthConfig::new("secret", "$2b$04$hash").with_token_ttl(Duration::minutes(5));
        assert_eq!(config.token_ttl.num_seconds(), 300);
        assert!(config.validate().is_ok());
    }
}
