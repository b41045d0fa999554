//! Token Authenticator
//! Mission: Authenticate credentials, issue access tokens, validate them back

use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::Duration;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::AuthConfig;
use crate::error::{CredentialError, LoginError, ValidationError};
use crate::models::{AccessToken, AuthenticatedIdentity, Claims, Credential, User};
use crate::password;
use crate::store::UserStore;
use crate::token::TokenCodec;

/// The authentication core.
///
/// Stateless by construction: no session records, no revocation list. Every
/// operation is a single bounded computation over the injected store and
/// clock, so concurrent calls need no coordination.
pub struct TokenAuthenticator {
    store: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
    codec: TokenCodec,
    default_ttl: Duration,
}

impl TokenAuthenticator {
    /// Build an authenticator from validated configuration.
    ///
    /// Configuration problems (empty secret, non-positive ttl) fail here,
    /// at startup, never inside a request.
    pub fn new(config: &AuthConfig, store: Arc<dyn UserStore>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            store,
            clock: Arc::new(SystemClock),
            codec: TokenCodec::new(&config.jwt_secret),
            default_ttl: config.token_ttl,
        })
    }

    /// Swap the time source. Production keeps the system clock; tests and
    /// replay tooling inject their own.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Check a username/password pair against the store.
    ///
    /// The result distinguishes an unknown user from a wrong password.
    /// That distinction is for tests and audit logs only - transports must
    /// go through [`login`](Self::login) or otherwise collapse both kinds
    /// before anything leaves the process.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, CredentialError> {
        let user = self
            .store
            .lookup(username)
            .ok_or(CredentialError::UnknownUser)?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(CredentialError::BadPassword);
        }

        Ok(user)
    }

    /// Sign a fresh access token for `username`.
    ///
    /// `ttl` defaults to the configured lifetime. The caller is expected to
    /// have authenticated the subject first; this method does not consult
    /// the store.
    pub fn issue_token(&self, username: &str, ttl: Option<Duration>) -> Result<AccessToken> {
        let ttl_secs = ttl.unwrap_or(self.default_ttl).num_seconds();
        if ttl_secs <= 0 {
            bail!("token ttl must be positive, got {ttl_secs}s");
        }

        let issued_at = self.clock.now_secs();
        let expires_at = issued_at + ttl_secs;
        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at,
            exp: expires_at,
        };

        debug!("issuing access token for {username}, expires in {ttl_secs}s");

        let token = self.codec.encode(&claims)?;
        Ok(AccessToken {
            token,
            issued_at,
            expires_at,
        })
    }

    /// Authenticate and issue in one step - the login flow.
    ///
    /// Both credential failure kinds collapse into
    /// [`LoginError::InvalidCredentials`] here; the log line keeps the real
    /// reason.
    pub fn login(
        &self,
        credential: &Credential,
        ttl: Option<Duration>,
    ) -> Result<AccessToken, LoginError> {
        info!("login attempt: {}", credential.username);

        let user = match self.authenticate(&credential.username, &credential.password) {
            Ok(user) => user,
            Err(reason) => {
                warn!("failed login for {}: {reason}", credential.username);
                return Err(LoginError::InvalidCredentials);
            }
        };

        let token = self
            .issue_token(&user.username, ttl)
            .map_err(LoginError::Internal)?;

        info!("login successful: {} ({})", user.username, user.role.as_str());
        Ok(token)
    }

    /// Validate a presented token and resolve the identity behind it.
    ///
    /// Runs Decode -> VerifySignature -> CheckExpiry -> ResolveSubject ->
    /// CheckDisabled; the first failing step wins. Resolving the subject
    /// against the store on every call is what lets deleted and disabled
    /// accounts lose access without a revocation list.
    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedIdentity, ValidationError> {
        let claims = self.codec.decode(token)?;

        if self.clock.now_secs() >= claims.exp {
            return Err(ValidationError::Expired);
        }

        let user = self
            .store
            .lookup(&claims.sub)
            .ok_or(ValidationError::UnknownSubject)?;

        if user.disabled {
            return Err(ValidationError::Disabled);
        }

        debug!("validated access token for {}", user.username);

        Ok(AuthenticatedIdentity {
            username: user.username,
            role: user.role,
            disabled: false,
        })
    }
}
