//! Mock authentication backed by browser-local storage.
//!
//! The portal has no server: credentials and the active session live in a
//! key-value [`SessionStore`] (localStorage in the browser, an in-memory map
//! in tests). [`AuthService`] implements signup/login/logout on top of it.

pub mod service;
pub mod store;

pub use service::{AuthError, AuthService, MIN_PASSWORD_LEN};
pub use store::{session_store, MemoryStore, SessionStore};
