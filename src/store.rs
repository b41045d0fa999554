//! User Storage
//! Mission: Read-only lookup contract plus an in-memory reference store

use std::collections::HashMap;

use anyhow::Result;
use parking_lot::RwLock;
use tracing::info;

use crate::config::AuthConfig;
use crate::models::{Role, User};
use crate::password;

/// Lookup contract the authenticator depends on.
///
/// The core only ever reads through this trait, keyed by username. Whatever
/// sits behind it is the embedding application's business; swapping a
/// database for a test fixture must not touch the authenticator.
pub trait UserStore: Send + Sync {
    /// Fetch the record for `username`, if one exists.
    fn lookup(&self, username: &str) -> Option<User>;
}

/// In-memory user store.
///
/// Backs small deployments and every test in this crate. Lookups take the
/// read lock only; the management methods below are not part of the
/// [`UserStore`] contract and exist so accounts can be created, disabled,
/// and deleted while issued tokens are still in flight.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the configured default admin account, so
    /// a fresh deployment has a way in.
    pub fn seeded(config: &AuthConfig) -> Self {
        let store = Self::new();
        store.insert(User {
            username: config.default_admin_username.clone(),
            password_hash: config.default_admin_password_hash.clone(),
            role: Role::Admin,
            disabled: false,
        });
        info!(
            "default admin user seeded (username: {})",
            config.default_admin_username
        );
        store
    }

    /// Insert or replace a record.
    pub fn insert(&self, user: User) {
        self.users.write().insert(user.username.clone(), user);
    }

    /// Hash `password` and insert a new enabled account.
    pub fn add_user(&self, username: &str, password: &str, role: Role) -> Result<User> {
        let user = User {
            username: username.to_string(),
            password_hash: password::hash_password(password)?,
            role,
            disabled: false,
        };
        self.insert(user.clone());
        info!("created user: {} ({})", username, role.as_str());
        Ok(user)
    }

    /// Delete an account. Returns false if it did not exist.
    pub fn remove(&self, username: &str) -> bool {
        let removed = self.users.write().remove(username).is_some();
        if removed {
            info!("deleted user: {username}");
        }
        removed
    }

    /// Flip the disabled flag on an account. Returns false if it did not
    /// exist.
    pub fn set_disabled(&self, username: &str, disabled: bool) -> bool {
        match self.users.write().get_mut(username) {
            Some(user) => {
                user.disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserStore for MemoryUserStore {
    fn lookup(&self, username: &str) -> Option<User> {
        self.users.read().get(username).cloned()
    }
}
