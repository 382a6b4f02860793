//! End-to-end auth flows over the in-memory store: signup, login, logout,
//! session persistence and credential storage.

use std::rc::Rc;

use umbros_portal::auth::store::{password_key, SESSION_KEY};
use umbros_portal::auth::{AuthError, AuthService, MemoryStore, SessionStore};

fn service_with_store() -> (AuthService, Rc<MemoryStore>) {
    let store = Rc::new(MemoryStore::new());
    let service = AuthService::new(store.clone());
    (service, store)
}

#[test]
fn signup_then_login_opens_a_session() {
    let (service, _) = service_with_store();

    service.signup("kael", "shadow-fire").unwrap();
    assert_eq!(service.current_session(), None);

    service.login("kael", "shadow-fire").unwrap();
    assert_eq!(service.current_session().as_deref(), Some("kael"));
}

#[test]
fn duplicate_signup_is_rejected() {
    let (service, _) = service_with_store();

    service.signup("kael", "shadow-fire").unwrap();
    assert_eq!(
        service.signup("kael", "other-password"),
        Err(AuthError::UsernameTaken)
    );
    // The original credentials still work
    service.login("kael", "shadow-fire").unwrap();
}

#[test]
fn short_password_is_rejected_at_signup() {
    let (service, store) = service_with_store();

    assert_eq!(
        service.signup("kael", "short"),
        Err(AuthError::PasswordTooShort)
    );
    assert!(store.get(&password_key("kael")).is_none());
    assert_eq!(service.registered().unwrap(), Vec::<String>::new());
}

#[test]
fn wrong_password_and_unknown_user_both_fail_closed() {
    let (service, _) = service_with_store();

    service.signup("kael", "shadow-fire").unwrap();
    assert_eq!(
        service.login("kael", "wrong-password"),
        Err(AuthError::InvalidCredentials)
    );
    assert_eq!(
        service.login("nobody", "shadow-fire"),
        Err(AuthError::InvalidCredentials)
    );
    assert_eq!(service.current_session(), None);
}

#[test]
fn logout_clears_the_session_and_is_idempotent() {
    let (service, store) = service_with_store();

    service.signup("kael", "shadow-fire").unwrap();
    service.login("kael", "shadow-fire").unwrap();

    service.logout();
    assert_eq!(service.current_session(), None);
    assert!(store.get(SESSION_KEY).is_none());

    // Logging out again is a no-op
    service.logout();
    assert_eq!(service.current_session(), None);
}

#[test]
fn session_survives_a_new_service_over_the_same_store() {
    let store = Rc::new(MemoryStore::new());

    let first = AuthService::new(store.clone());
    first.signup("kael", "shadow-fire").unwrap();
    first.login("kael", "shadow-fire").unwrap();
    drop(first);

    // A fresh service over the same store sees the session, as a page
    // reload over localStorage would
    let second = AuthService::new(store);
    assert_eq!(second.current_session().as_deref(), Some("kael"));
    second.logout();
    assert_eq!(second.current_session(), None);
}

#[test]
fn passwords_are_never_stored_in_plaintext() {
    let (service, store) = service_with_store();

    service.signup("kael", "shadow-fire").unwrap();
    let stored = store.get(&password_key("kael")).unwrap();
    assert!(!stored.contains("shadow-fire"));

    // Same password, different user: hashes differ because salts differ
    service.signup("riven", "shadow-fire").unwrap();
    let other = store.get(&password_key("riven")).unwrap();
    assert_ne!(stored, other);
}

#[test]
fn registered_usernames_accumulate_in_signup_order() {
    let (service, _) = service_with_store();

    service.signup("kael", "shadow-fire").unwrap();
    service.signup("riven", "obsidian-oath").unwrap();
    service.signup("umbros", "phoenix-down").unwrap();

    assert_eq!(service.registered().unwrap(), ["kael", "riven", "umbros"]);
}
