//! Full-width story scene sections used on the home page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AnimatedSceneProps {
    pub title: String,
    pub description: String,
    /// Background image URL, applied as an inline style so each scene can
    /// carry its own artwork.
    #[props(default)]
    pub background_image: Option<String>,
    #[props(default)]
    pub children: Element,
}

/// A themed section with a heading, narration text and optional extra
/// content (video players, character cards) supplied by the caller.
#[component]
pub fn AnimatedScene(props: AnimatedSceneProps) -> Element {
    let style = props
        .background_image
        .as_deref()
        .map(|url| format!("background-image: url('{url}')"))
        .unwrap_or_default();

    rsx! {
        section { class: "scene", style: "{style}",
            div { class: "scene-overlay",
                h2 { class: "scene-title", "{props.title}" }
                p { class: "scene-description", "{props.description}" }
                {props.children}
            }
        }
    }
}
