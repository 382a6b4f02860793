//! Catch-all page for unknown routes.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Not Found".to_string(),
            nav_active: String::new(),

            section { class: "not-found",
                h1 { "404" }
                p { "The shadows hold no page at " code { "{path}" } "." }
                Link { class: "btn btn-primary", to: Route::Home {}, "Return Home" }
            }
        }
    }
}
