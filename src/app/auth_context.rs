//! Auth context for shared session state.
//!
//! The [`AuthService`] is constructed at the composition root and injected
//! here; the context keeps a signal-backed mirror of the session (username +
//! authenticated flag) that pass-through operations update synchronously.
//! The mirror is refreshed from the store only at mount and on explicit
//! login/logout calls.

use dioxus::prelude::*;

use crate::auth::{AuthError, AuthService};

/// Global auth state shared via context.
#[derive(Clone)]
pub struct AuthContext {
    service: AuthService,
    username: Signal<Option<String>>,
}

impl AuthContext {
    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.username.read().is_some()
    }

    /// Username of the active session, if any.
    pub fn username(&self) -> Option<String> {
        self.username.read().clone()
    }

    /// Authenticate and cache the new session before returning.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.service.login(username, password)?;
        let mut cached = self.username;
        cached.set(Some(username.to_string()));
        Ok(())
    }

    /// Register a new user. Does not open a session or touch the cache.
    pub fn signup(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.service.signup(username, password)
    }

    /// Clear the session and the cache. Idempotent.
    pub fn logout(&self) {
        self.service.logout();
        let mut cached = self.username;
        cached.set(None);
    }
}

/// Install the auth context at the app root. The session mirror is seeded
/// from the store once, at mount.
pub fn use_auth_provider(service: AuthService) {
    let seed = service.clone();
    let username = use_signal(move || seed.current_session());

    use_context_provider(|| AuthContext { service, username });
}

/// Get the auth context - use in any component.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
