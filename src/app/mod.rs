//! Dioxus application entry point.
//!
//! Provides the root App component: contexts are installed here (auth,
//! toasts, the media generator) and the router takes over from there.

use std::rc::Rc;

use dioxus::prelude::*;

pub mod auth_context;
pub mod components;
pub mod guard;
pub mod pages;
pub mod toast;

use crate::auth::{session_store, AuthService};
use crate::generation::{MediaGenerator, MockGenerator};
use auth_context::use_auth_provider;
use guard::RequireAuth;
use pages::{Ebooks, Gallery, Generator, Home, Latest, Login, NotFound, Stories};
use toast::use_toast_provider;

/// Root app component. The composition root: the session store, auth
/// service and mock generator are constructed here and injected, never
/// looked up ambiently.
#[component]
pub fn App() -> Element {
    let service = use_hook(|| AuthService::new(session_store()));
    use_auth_provider(service);

    use_toast_provider();

    use_context_provider(|| Rc::new(MockGenerator::new()) as Rc<dyn MediaGenerator>);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes. Everything except the login view and the catch-all
/// sits behind the auth guard.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:from")]
    Login { from: String },
    #[layout(RequireAuth)]
        #[route("/")]
        Home {},
        #[route("/ebooks?:category")]
        Ebooks { category: String },
        #[route("/stories")]
        Stories {},
        #[route("/gallery?:kind")]
        Gallery { kind: String },
        #[route("/latest")]
        Latest {},
        #[route("/generator?:tab")]
        Generator { tab: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
