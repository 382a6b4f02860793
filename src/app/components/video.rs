//! Inline video player card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct VideoPlayerProps {
    pub title: String,
    pub src: String,
    #[props(default)]
    pub poster: Option<String>,
}

/// Native `<video>` element with browser controls and a title overlay.
#[component]
pub fn VideoPlayer(props: VideoPlayerProps) -> Element {
    rsx! {
        figure { class: "video-player",
            video {
                controls: true,
                preload: "metadata",
                poster: props.poster.as_deref().unwrap_or_default(),
                src: "{props.src}",
            }
            figcaption { class: "video-title", "{props.title}" }
        }
    }
}
