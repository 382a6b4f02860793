//! Latest page: fresh episode releases and upcoming seasons.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::catalog::{LATEST_EPISODES, UPCOMING_SEASONS};

#[component]
pub fn Latest() -> Element {
    rsx! {
        Layout {
            title: "Latest".to_string(),
            nav_active: "latest".to_string(),

            h1 { "Latest Releases" }
            p { class: "text-muted", "New episodes drop every week." }

            div { class: "card-grid",
                for ep in LATEST_EPISODES {
                    article { key: "{ep.id}", class: "episode-card",
                        div { class: "episode-thumb",
                            img { src: "{ep.thumbnail}", alt: "{ep.title}" }
                            if ep.is_new {
                                span { class: "badge badge-new", "NEW" }
                            }
                            span { class: "badge badge-duration", "{ep.duration_min} min" }
                        }
                        div { class: "episode-body",
                            h3 { "{ep.title}" }
                            p { class: "text-muted", "Episode {ep.episode} · {ep.released}" }
                            button { class: "btn btn-primary", "Watch Now" }
                        }
                    }
                }
            }

            h2 { "Coming Soon" }
            div { class: "card-grid",
                for season in UPCOMING_SEASONS {
                    article { key: "{season.id}", class: "episode-card upcoming",
                        div { class: "episode-thumb",
                            img { src: "{season.thumbnail}", alt: "{season.title}" }
                            span { class: "badge badge-upcoming", "{season.release_label}" }
                        }
                        div { class: "episode-body",
                            h3 { "{season.title}" }
                            p { class: "text-muted", "{season.season} · {season.genre}" }
                            button { class: "btn btn-ghost", "Add to Watchlist" }
                        }
                    }
                }
            }
        }
    }
}
