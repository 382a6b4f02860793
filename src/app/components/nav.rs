//! Navigation component.

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "ebooks")
    pub active: String,
}

/// Top navigation bar: section links plus the session corner (username and
/// logout when authenticated, a login link otherwise).
#[component]
pub fn Nav(props: NavProps) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let logout = {
        let auth = auth.clone();
        move |_| {
            auth.logout();
            nav.replace(Route::Login { from: String::new() });
        }
    };

    rsx! {
        nav { class: "top-nav",
            ul {
                li {
                    Link { to: Route::Home {},
                        strong { class: "brand", "UMBROS" }
                    }
                }
            }
            ul {
                li {
                    if props.active == "ebooks" {
                        Link { to: Route::Ebooks { category: String::new() }, aria_current: "page", strong { "eBooks" } }
                    } else {
                        Link { to: Route::Ebooks { category: String::new() }, "eBooks" }
                    }
                }
                li {
                    if props.active == "stories" {
                        Link { to: Route::Stories {}, aria_current: "page", strong { "Stories" } }
                    } else {
                        Link { to: Route::Stories {}, "Stories" }
                    }
                }
                li {
                    if props.active == "latest" {
                        Link { to: Route::Latest {}, aria_current: "page", strong { "Latest" } }
                    } else {
                        Link { to: Route::Latest {}, "Latest" }
                    }
                }
                li {
                    if props.active == "gallery" {
                        Link { to: Route::Gallery { kind: String::new() }, aria_current: "page", strong { "Gallery" } }
                    } else {
                        Link { to: Route::Gallery { kind: String::new() }, "Gallery" }
                    }
                }
                li {
                    if props.active == "generator" {
                        Link { to: Route::Generator { tab: String::new() }, aria_current: "page", strong { "Generator" } }
                    } else {
                        Link { to: Route::Generator { tab: String::new() }, "Generator" }
                    }
                }
            }
            ul { class: "nav-session",
                if auth.is_authenticated() {
                    li { class: "nav-username",
                        if let Some(username) = auth.username() {
                            span { "{username}" }
                        }
                    }
                    li {
                        button { class: "btn btn-ghost", onclick: logout, "Logout" }
                    }
                } else {
                    li {
                        Link { to: Route::Login { from: String::new() }, "Login" }
                    }
                }
            }
        }
    }
}
