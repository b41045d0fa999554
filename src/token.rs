//! Token Codec
//! Mission: Sign and verify compact HS256 access tokens

use anyhow::{Context, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::ValidationError;
use crate::models::Claims;

/// Encodes and decodes the wire form of an access token: three
/// dot-separated base64url segments (header, payload, signature), signed
/// with HMAC-SHA256 over the exact encoded payload bytes.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by the authenticator against its injected
        // clock, not by the library against system time.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign `claims` into a compact token string.
    pub fn encode(&self, claims: &Claims) -> Result<String> {
        encode(&Header::default(), claims, &self.encoding).context("failed to sign access token")
    }

    /// Verify the signature and decode the payload.
    ///
    /// Only structural and signature failures surface here; expiry and
    /// subject resolution belong to the validation pipeline above.
    pub fn decode(&self, token: &str) -> Result<Claims, ValidationError> {
        let data =
            decode::<Claims>(token, &self.decoding, &self.validation).map_err(map_decode_error)?;

        if data.claims.sub.is_empty() {
            return Err(ValidationError::Malformed);
        }

        Ok(data.claims)
    }
}

/// Maps jsonwebtoken errors onto the validation taxonomy.
fn map_decode_error(error: jsonwebtoken::errors::Error) -> ValidationError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::InvalidSignature => ValidationError::BadSignature,
        ErrorKind::ExpiredSignature => ValidationError::Expired,
        _ => ValidationError::Malformed,
    }
}
