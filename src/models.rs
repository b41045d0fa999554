//! Authentication Models
//! Mission: Define the user, credential, and token data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// User account as stored in the user store.
///
/// `username` is the unique key. The core treats records as a read-only
/// view; mutations belong to whoever owns the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash, never leaves the process
    pub role: Role,
    pub disabled: bool,
}

/// User roles for access control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// A username/password pair supplied on login. Transient - lives for the
/// duration of one call and is never persisted.
#[derive(Clone, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of successful token validation. Derived, not stored; `disabled`
/// is always false here because disabled users never validate.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub username: String,
    pub role: Role,
    pub disabled: bool,
}

/// Signed token payload.
///
/// `iat`/`exp` are unix seconds (UTC). Issuance guarantees `exp > iat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // subject (username)
    pub iat: i64,    // issued-at timestamp
    pub exp: i64,    // expiration timestamp
}

/// An issued access token together with its validity window.
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub token: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl AccessToken {
    /// Seconds until expiry, counted from issuance.
    pub fn expires_in(&self) -> i64 {
        self.expires_at - self.issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let admin = Role::Admin;
        let json = serde_json::to_string(&admin).unwrap();
        assert_eq!(json, r#""admin""#);

        let user: Role = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(user, Role::User);
    }

    #[test]
    fn test_role_string_conversion() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::User.as_str(), "user");

        assert_eq!(Role::from_str("admin"), Some(Role::Admin));
        assert_eq!(Role::from_str("USER"), Some(Role::User));
        assert_eq!(Role::from_str("invalid"), None);
    }

    #[test]
    fn test_credential_debug_redacts_password() {
        let credential = Credential {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };

        let rendered = format!("{credential:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            username: "alice".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: Role::User,
            disabled: false,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("$2b$12$secret"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_access_token_expires_in() {
        let token = AccessToken {
            token: "header.payload.signature".to_string(),
            issued_at: 1_700_000_000,
            expires_at: 1_700_001_800,
        };
        assert_eq!(token.expires_in(), 1800);
    }
}
