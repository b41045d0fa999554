//! Password Hashing
//! Mission: Hash and verify passwords with bcrypt

use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::warn;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String> {
    hash(plain, DEFAULT_COST).context("failed to hash password")
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// bcrypt recomputes the digest and compares it in constant time, so the
/// comparison leaks nothing about how much of the hash matched. A stored
/// hash that bcrypt cannot parse counts as a failed match rather than an
/// error; a corrupt store row must not take down the request path.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    match verify(plain, stored_hash) {
        Ok(valid) => valid,
        Err(error) => {
            warn!("could not verify password against stored hash: {error}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // DEFAULT_COST is deliberately slow; cost 4 keeps the suite fast.
    fn quick_hash(plain: &str) -> String {
        hash(plain, 4).unwrap()
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hashed = quick_hash("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &hashed));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hashed = quick_hash("correct horse battery staple");
        assert!(!verify_password("Tr0ub4dor&3", &hashed));
        assert!(!verify_password("", &hashed));
    }

    #[test]
    fn test_garbage_hash_counts_as_mismatch() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_hash_password_produces_bcrypt_format() {
        let hashed = hash_password("secret").unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(verify_password("secret", &hashed));
    }
}
