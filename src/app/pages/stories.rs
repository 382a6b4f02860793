//! Stories page: featured carousel-style cards plus a popular grid.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::catalog::{Story, FEATURED_STORIES, POPULAR_STORIES};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shelf {
    Featured,
    Popular,
    NewReleases,
}

#[component]
pub fn Stories() -> Element {
    let mut shelf = use_signal(|| Shelf::Featured);

    let stories: &[Story] = match shelf() {
        Shelf::Featured => FEATURED_STORIES,
        Shelf::Popular => POPULAR_STORIES,
        Shelf::NewReleases => &[],
    };

    rsx! {
        Layout {
            title: "Stories".to_string(),
            nav_active: "stories".to_string(),

            h1 { "Stories" }
            p { class: "text-muted", "Original serialized fiction from the Umbros universe and beyond." }

            div { class: "tab-row", role: "tablist",
                button {
                    class: if shelf() == Shelf::Featured { "tab tab-active" } else { "tab" },
                    onclick: move |_| shelf.set(Shelf::Featured),
                    "Featured"
                }
                button {
                    class: if shelf() == Shelf::Popular { "tab tab-active" } else { "tab" },
                    onclick: move |_| shelf.set(Shelf::Popular),
                    "Popular"
                }
                button {
                    class: if shelf() == Shelf::NewReleases { "tab tab-active" } else { "tab" },
                    onclick: move |_| shelf.set(Shelf::NewReleases),
                    "New Releases"
                }
            }

            if shelf() == Shelf::NewReleases {
                article { class: "empty-state",
                    "New chapters drop every Friday. Check back soon!"
                }
            }

            div { class: "card-grid",
                for story in stories {
                    article { key: "{story.id}", class: "story-card",
                        img { class: "story-cover", src: "{story.cover}", alt: "{story.title}" }
                        div { class: "story-body",
                            h3 { "{story.title}" }
                            p { class: "text-muted", "by {story.author} · {story.chapters} chapters" }
                            p { "{story.excerpt}" }
                            div { class: "tag-row",
                                for tag in story.tags {
                                    span { class: "tag", "{tag}" }
                                }
                            }
                            button { class: "btn btn-primary", "Start Reading" }
                        }
                    }
                }
            }
        }
    }
}
