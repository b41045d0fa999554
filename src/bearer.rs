//! Bearer Helpers
//! Mission: Header parsing and status mapping for transports

use crate::error::{LoginError, ValidationError};

/// Challenge scheme a transport should put in `WWW-Authenticate` when it
/// rejects a request.
pub const WWW_AUTHENTICATE: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// Accepts the `Bearer <token>` scheme only; any other scheme, or an empty
/// token, yields `None`.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

impl ValidationError {
    /// HTTP status a transport should surface for this failure.
    ///
    /// A disabled account is a 400 - the token itself checked out; every
    /// other kind is a 401 with the [`WWW_AUTHENTICATE`] challenge.
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationError::Disabled => 400,
            ValidationError::Malformed
            | ValidationError::BadSignature
            | ValidationError::Expired
            | ValidationError::UnknownSubject => 401,
        }
    }
}

impl LoginError {
    /// HTTP status a transport should surface for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            LoginError::InvalidCredentials => 401,
            LoginError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer_extracts_token() {
        assert_eq!(
            parse_bearer("Bearer eyJhbGciOiJIUzI1NiJ9.e30.sig"),
            Some("eyJhbGciOiJIUzI1NiJ9.e30.sig")
        );
    }

    #[test]
    fn test_parse_bearer_rejects_other_schemes() {
        assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer("bearer lowercase-scheme"), None);
        assert_eq!(parse_bearer("Token abc"), None);
        assert_eq!(parse_bearer("abc"), None);
    }

    #[test]
    fn test_parse_bearer_rejects_empty_token() {
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Bearer    "), None);
    }

    #[test]
    fn test_validation_error_status_codes() {
        assert_eq!(ValidationError::Malformed.status_code(), 401);
        assert_eq!(ValidationError::BadSignature.status_code(), 401);
        assert_eq!(ValidationError::Expired.status_code(), 401);
        assert_eq!(ValidationError::UnknownSubject.status_code(), 401);
        assert_eq!(ValidationError::Disabled.status_code(), 400);
    }

    #[test]
    fn test_login_error_status_codes() {
        assert_eq!(LoginError::InvalidCredentials.status_code(), 401);
        assert_eq!(
            LoginError::Internal(anyhow::anyhow!("boom")).status_code(),
            500
        );
    }
}
