//! Login / signup page.
//!
//! One form, two modes. A successful login navigates to the redirect target
//! carried in the `from` query parameter; a successful signup flips back to
//! login mode with the username kept so the user can sign straight in.

use dioxus::prelude::*;
use tracing::info;

use crate::app::auth_context::use_auth;
use crate::app::components::{FlameEffect, Intensity};
use crate::app::guard::resolve_redirect;
use crate::app::toast::{use_toast, Toaster};
use crate::auth::MIN_PASSWORD_LEN;

const MIN_USERNAME_LEN: usize = 3;

/// Simulated network latency for auth requests, browser only.
#[cfg(target_arch = "wasm32")]
const AUTH_DELAY_MS: u32 = 800;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

fn validate_username(username: &str) -> Option<&'static str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        Some("Username is required")
    } else if trimmed.len() < MIN_USERNAME_LEN {
        Some("Username must be at least 3 characters")
    } else {
        None
    }
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.len() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

#[component]
pub fn Login(from: String) -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let nav = use_navigator();

    let mut mode = use_signal(|| Mode::Login);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);
    let mut in_progress = use_signal(|| false);

    // Already signed in - nothing to do here, go where the caller wanted.
    if auth.is_authenticated() {
        nav.replace(resolve_redirect(&from).as_str());
        return rsx! {};
    }

    let submit = {
        let auth = auth.clone();
        let from = from.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();

            let u_err = validate_username(&username());
            let p_err = validate_password(&password());
            username_error.set(u_err);
            password_error.set(p_err);
            if u_err.is_some() || p_err.is_some() || in_progress() {
                return;
            }

            in_progress.set(true);
            let auth = auth.clone();
            let from = from.clone();
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::TimeoutFuture::new(AUTH_DELAY_MS).await;

                let name = username().trim().to_string();
                match mode() {
                    Mode::Login => match auth.login(&name, &password()) {
                        Ok(()) => {
                            info!(username = %name, "login succeeded");
                            toasts.success(format!("Welcome back, {name}!"));
                            nav.replace(resolve_redirect(&from).as_str());
                        }
                        Err(err) => toasts.error(err.to_string()),
                    },
                    Mode::Signup => match auth.signup(&name, &password()) {
                        Ok(()) => {
                            info!(username = %name, "signup succeeded");
                            toasts.success("Account created. Sign in to continue.");
                            mode.set(Mode::Login);
                            password.set(String::new());
                        }
                        Err(err) => toasts.error(err.to_string()),
                    },
                }
                in_progress.set(false);
            });
        }
    };

    let (heading, submit_label, toggle_prompt, toggle_label) = match mode() {
        Mode::Login => ("Sign In", "Sign In", "New to Umbros?", "Create an account"),
        Mode::Signup => ("Create Account", "Sign Up", "Already have an account?", "Sign in"),
    };

    rsx! {
        document::Title { "Sign In - Umbros: Shadow Awakening" }
        document::Link { rel: "stylesheet", href: asset!("/assets/portal.css") }

        div { class: "auth-page",
            Toaster {}
            FlameEffect { intensity: Intensity::Low }
            form { class: "auth-card", onsubmit: submit,
                h1 { class: "auth-brand", "UMBROS" }
                h2 { "{heading}" }

                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    name: "username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| {
                        username.set(evt.value());
                        username_error.set(None);
                    },
                }
                if let Some(err) = username_error() {
                    small { class: "field-error", "{err}" }
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    autocomplete: if mode() == Mode::Signup { "new-password" } else { "current-password" },
                    value: "{password}",
                    oninput: move |evt| {
                        password.set(evt.value());
                        password_error.set(None);
                    },
                }
                if let Some(err) = password_error() {
                    small { class: "field-error", "{err}" }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: in_progress(),
                    if in_progress() { "Please wait..." } else { "{submit_label}" }
                }

                p { class: "auth-toggle",
                    "{toggle_prompt} "
                    button {
                        r#type: "button",
                        class: "btn-link",
                        onclick: move |_| {
                            mode.set(match mode() {
                                Mode::Login => Mode::Signup,
                                Mode::Signup => Mode::Login,
                            });
                            username_error.set(None);
                            password_error.set(None);
                        },
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_must_be_present_and_long_enough() {
        assert!(validate_username("").is_some());
        assert!(validate_username("   ").is_some());
        assert!(validate_username("ab").is_some());
        assert!(validate_username("kael").is_none());
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_username_length() {
        assert!(validate_username("  ab  ").is_some());
        assert!(validate_username("  abc  ").is_none());
    }

    #[test]
    fn password_must_meet_minimum_length() {
        assert!(validate_password("").is_some());
        assert!(validate_password("12345").is_some());
        assert!(validate_password("123456").is_none());
    }
}
