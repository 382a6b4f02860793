//! Route guard for session-protected pages.
//!
//! Wraps the protected branch of the router: authenticated visitors see the
//! nested route, everyone else is redirected to the login view with the
//! originally requested location (path + query) carried along so login can
//! send them back.

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::Route;

/// Percent-encode a location (path + query) for the login `from` parameter.
pub fn encode_redirect(location: &str) -> String {
    urlencoding::encode(location).into_owned()
}

/// Resolve a login `from` parameter back into a navigation target.
/// Anything that is not a same-origin absolute path falls back to `/`.
pub fn resolve_redirect(from: &str) -> String {
    let decoded = match urlencoding::decode(from) {
        Ok(cow) => cow.into_owned(),
        Err(_) => return "/".to_string(),
    };
    if decoded.starts_with('/') && !decoded.starts_with("//") {
        decoded
    } else {
        "/".to_string()
    }
}

/// Router layout wrapping every protected route.
#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    if !auth.is_authenticated() {
        nav.replace(Route::Login {
            from: encode_redirect(&route.to_string()),
        });
        // Shown for the instant before the router processes the redirect
        return rsx! {
            section { class: "auth-notice",
                h2 { "Sign in required" }
                p { "You need to be logged in to access this page." }
                Link { to: Route::Login { from: String::new() }, class: "btn btn-primary",
                    "Go to Login"
                }
            }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_round_trips_path_and_query() {
        let original = "/gallery?kind=Concept%20Art";
        let encoded = encode_redirect(original);
        assert!(!encoded.contains('/'), "separator must be escaped: {encoded}");
        assert_eq!(resolve_redirect(&encoded), original);
    }

    #[test]
    fn plain_paths_survive_unencoded() {
        assert_eq!(resolve_redirect("/latest"), "/latest");
    }

    #[test]
    fn empty_and_foreign_targets_fall_back_to_root() {
        assert_eq!(resolve_redirect(""), "/");
        assert_eq!(resolve_redirect("https%3A%2F%2Fevil.example"), "/");
        assert_eq!(resolve_redirect("%2F%2Fevil.example"), "/");
        assert_eq!(resolve_redirect("gallery"), "/");
    }
}
