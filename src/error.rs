//! Error Taxonomy
//! Mission: Typed, terminal failure kinds for every authentication path

use std::fmt;

/// Why a username/password pair was rejected.
///
/// The two kinds stay distinct here so tests and audit logs can tell them
/// apart. External callers must never see the distinction; [`login`] and the
/// transport-facing helpers collapse both into [`LoginError::InvalidCredentials`].
///
/// [`login`]: crate::TokenAuthenticator::login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// No record for the supplied username.
    UnknownUser,
    /// Record exists but the password does not match its hash.
    BadPassword,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::UnknownUser => write!(f, "unknown user"),
            CredentialError::BadPassword => write!(f, "password mismatch"),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Why a presented token was rejected.
///
/// Validation runs Decode -> VerifySignature -> CheckExpiry -> ResolveSubject
/// -> CheckDisabled; the first failing step names the kind and nothing later
/// runs. All kinds are terminal - the caller must re-authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The token could not be decoded into a signed payload.
    Malformed,
    /// The signature does not match the payload.
    BadSignature,
    /// The token is past its expiry timestamp.
    Expired,
    /// The subject no longer exists in the user store.
    UnknownSubject,
    /// The subject exists but the account is disabled.
    Disabled,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Malformed => write!(f, "malformed token"),
            ValidationError::BadSignature => write!(f, "invalid token signature"),
            ValidationError::Expired => write!(f, "token has expired"),
            ValidationError::UnknownSubject => write!(f, "token subject no longer exists"),
            ValidationError::Disabled => write!(f, "user account is disabled"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Login failure as surfaced to external callers.
///
/// One message for every credential problem, so responses don't reveal
/// whether the username or the password was wrong.
#[derive(Debug)]
pub enum LoginError {
    InvalidCredentials,
    Internal(anyhow::Error),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "incorrect username or password"),
            LoginError::Internal(error) => write!(f, "internal authentication error: {error}"),
        }
    }
}

impl std::error::Error for LoginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginError::InvalidCredentials => None,
            LoginError::Internal(error) => Some(error.as_ref()),
        }
    }
}

impl From<CredentialError> for LoginError {
    fn from(_: CredentialError) -> Self {
        LoginError::InvalidCredentials
    }
}
