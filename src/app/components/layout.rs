//! Layout component wrapping all pages.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::toast::Toaster;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Umbros: Shadow Awakening", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/assets/portal.css")
        }

        // Body content
        Nav { active: props.nav_active.clone() }
        Toaster {}
        main { class: "page-main",
            {props.children}
        }
        footer { class: "page-footer",
            div { class: "footer-inner",
                div {
                    h3 { "Anime Universe" }
                    p { class: "text-muted", "Your portal to anime content" }
                }
                div { class: "footer-links",
                    a { href: "#", "Terms" }
                    a { href: "#", "Privacy" }
                    a { href: "#", "Contact" }
                }
            }
            small { class: "text-muted", "© 2025 Umbros: Shadow Awakening v{version}" }
        }
    }
}
