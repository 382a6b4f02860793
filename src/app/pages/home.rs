//! Home page: hero banner plus the story scenes and cast.

use dioxus::prelude::*;

use crate::app::components::{AnimatedScene, CharacterProfile, FlameEffect, Intensity, Layout, VideoPlayer};
use crate::app::Route;
use crate::catalog::CHARACTERS;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            header { class: "hero",
                FlameEffect { intensity: Intensity::High }
                div { class: "hero-inner",
                    h1 { class: "hero-title", "UMBROS" }
                    p { class: "hero-subtitle", "Shadow Awakening" }
                    p { class: "hero-tagline",
                        "In a world where shadows hold ancient power, one orphan's awakening will change everything."
                    }
                    Link { class: "btn btn-primary", to: Route::Latest {}, "Watch Latest Episodes" }
                }
            }

            AnimatedScene {
                title: "The Awakening".to_string(),
                description: "When raiders descend on Kael's village, something ancient stirs within him. \
                              The Shadow Phoenix, dormant for a thousand years, answers his desperation."
                    .to_string(),
                background_image: Some("/scene-awakening.jpg".to_string()),
                VideoPlayer {
                    title: "Episode 1 Opening".to_string(),
                    src: "/anime-video-sample.mp4".to_string(),
                    poster: Some("/scene-awakening.jpg".to_string()),
                }
            }

            AnimatedScene {
                title: "The Obsidian Sanctum".to_string(),
                description: "Hidden in the mountains, the Sanctum trains those bonded to Echoes. \
                              Kael must master his power before it consumes him."
                    .to_string(),
                background_image: Some("/scene-sanctum.jpg".to_string()),
            }

            AnimatedScene {
                title: "Meet the Cast".to_string(),
                description: "The souls bound together by the Shadow Phoenix's return.".to_string(),
                div { class: "character-grid",
                    for character in CHARACTERS {
                        CharacterProfile { character: *character }
                    }
                }
            }

            AnimatedScene {
                title: "Begin Your Journey".to_string(),
                description: "Explore the world of Umbros through ebooks, stories and art.".to_string(),
                div { class: "cta-row",
                    Link { class: "btn btn-primary", to: Route::Ebooks { category: String::new() }, "Browse eBooks" }
                    Link { class: "btn btn-ghost", to: Route::Gallery { kind: String::new() }, "View Gallery" }
                }
            }
        }
    }
}
