//! Auth service - signup, login, logout and session queries on top of the
//! session store.
//!
//! Passwords are stored as `hex(salt)$hex(sha256(salt || password))` and
//! verified by re-hashing the supplied password with the stored salt, so
//! localStorage never holds a plaintext credential (see DESIGN.md).

use std::rc::Rc;

use sha2::{Digest, Sha256};
use thiserror::Error;

use super::store::{password_key, SessionStore, REGISTERED_KEY, SESSION_KEY};

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Service-level auth failures. Every variant is surfaced to the user as a
/// dismissible notification; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("that username is already taken")]
    UsernameTaken,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("storage error: {0}")]
    Storage(String),
}

/// Login, signup, logout and current-session-query operations over an
/// injected [`SessionStore`].
#[derive(Clone)]
pub struct AuthService {
    store: Rc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Register a new user. Does not create a session. Fails with no
    /// mutation on a duplicate username or a too-short password.
    pub fn signup(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let mut registered = self.registered()?;
        if registered.iter().any(|u| u == username) {
            return Err(AuthError::UsernameTaken);
        }

        registered.push(username.to_string());
        let json = serde_json::to_string(&registered)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        self.store.set(REGISTERED_KEY, &json);
        self.store.set(&password_key(username), &hash_password(password));

        tracing::info!("registered new user {username}");
        Ok(())
    }

    /// Authenticate and open a session. Unknown usernames and wrong
    /// passwords fail identically, with no mutation.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let registered = self.registered()?;
        if !registered.iter().any(|u| u == username) {
            return Err(AuthError::InvalidCredentials);
        }

        let stored = self
            .store
            .get(&password_key(username))
            .ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(password, &stored) {
            return Err(AuthError::InvalidCredentials);
        }

        self.store.set(SESSION_KEY, username);
        tracing::info!("session opened for {username}");
        Ok(())
    }

    /// Clear the session unconditionally. Idempotent.
    pub fn logout(&self) {
        self.store.remove(SESSION_KEY);
        tracing::info!("session cleared");
    }

    /// The username of the active session, read from the store at call time.
    pub fn current_session(&self) -> Option<String> {
        self.store.get(SESSION_KEY)
    }

    /// Every username that has signed up, in signup order.
    pub fn registered(&self) -> Result<Vec<String>, AuthError> {
        match self.store.get(REGISTERED_KEY) {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!("corrupt registered-usernames entry: {e}");
                AuthError::Storage(e.to_string())
            }),
        }
    }
}

fn salted_digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    format!(
        "{}${}",
        hex::encode(salt),
        hex::encode(salted_digest(&salt, password))
    )
}

fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    hex::encode(salted_digest(&salt, password)) == digest_hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryStore;

    fn service() -> AuthService {
        AuthService::new(Rc::new(MemoryStore::new()))
    }

    #[test]
    fn hash_round_trips_and_salts_differ() {
        let a = hash_password("secret1");
        let b = hash_password("secret1");
        assert_ne!(a, b, "each hash gets a fresh salt");
        assert!(verify_password("secret1", &a));
        assert!(verify_password("secret1", &b));
        assert!(!verify_password("secret2", &a));
    }

    #[test]
    fn verify_rejects_malformed_entries() {
        assert!(!verify_password("x", "no-separator"));
        assert!(!verify_password("x", "zz$not-hex"));
    }

    #[test]
    fn signup_does_not_open_a_session() {
        let svc = service();
        svc.signup("alice", "secret1").unwrap();
        assert_eq!(svc.current_session(), None);
    }

    #[test]
    fn registered_list_preserves_signup_order() {
        let svc = service();
        svc.signup("alice", "secret1").unwrap();
        svc.signup("bob", "secret2").unwrap();
        assert_eq!(svc.registered().unwrap(), ["alice", "bob"]);
    }

    #[test]
    fn corrupt_registered_list_is_a_storage_error() {
        let store = Rc::new(MemoryStore::new());
        store.set(REGISTERED_KEY, "{not json");
        let svc = AuthService::new(store);
        assert!(matches!(svc.registered(), Err(AuthError::Storage(_))));
        assert!(matches!(
            svc.login("alice", "secret1"),
            Err(AuthError::Storage(_))
        ));
    }
}
