//! Session store - key-value persistence for credentials and the session.
//!
//! Key layout (all values are strings):
//! - `session-username`: the currently logged-in user, absent when logged out
//! - `registered-usernames`: JSON array of every username that signed up
//! - `password:<username>`: salted password hash for that user

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key holding the active session's username.
pub const SESSION_KEY: &str = "session-username";

/// Key holding the serialized registered-username list.
pub const REGISTERED_KEY: &str = "registered-usernames";

/// Per-user key holding the stored password hash.
pub fn password_key(username: &str) -> String {
    format!("password:{username}")
}

/// String key-value persistence. Single-threaded, no expiry, no size bound
/// beyond whatever the backing store enforces.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and as the non-wasm fallback.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser localStorage store. Persists across reloads within the same
/// browser profile; not shared across browsers or devices.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage write failed for key {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Default store for the current target: localStorage in the browser, an
/// in-memory map elsewhere.
pub fn session_store() -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("k", "v1");
        assert_eq!(store.get("k"), Some("v1".to_string()));

        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));

        store.remove("k");
        assert_eq!(store.get("k"), None);
        // Removing an absent key is a no-op
        store.remove("k");
    }

    #[test]
    fn password_key_embeds_username() {
        assert_eq!(password_key("alice"), "password:alice");
    }
}
