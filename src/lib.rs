//! Stateless bearer-token authentication core.
//!
//! Authenticates username/password pairs against an injected user store,
//! issues signed time-limited access tokens, and validates presented tokens
//! back into an authenticated identity. Storage backends and transports live
//! outside this crate: callers supply a [`UserStore`] implementation and map
//! the typed errors onto whatever protocol they serve.
//!
//! There is no logout or revocation surface. Tokens carry everything needed
//! for validation and die at expiry, so discarding a token client-side is the
//! whole logout story.

pub mod authenticator;
pub mod bearer;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod store;
pub mod token;

pub use authenticator::TokenAuthenticator;
pub use bearer::parse_bearer;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AuthConfig;
pub use error::{CredentialError, LoginError, ValidationError};
pub use models::{AccessToken, AuthenticatedIdentity, Claims, Credential, Role, User};
pub use store::{MemoryUserStore, UserStore};
