//! Gallery page: filterable art grid with a lightbox overlay.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;
use crate::catalog::{gallery_categories, gallery_in_category, ArtPiece};

#[component]
pub fn Gallery(kind: String) -> Element {
    let pieces = gallery_in_category(&kind);
    let mut lightbox = use_signal(|| None::<ArtPiece>);

    rsx! {
        Layout {
            title: "Gallery".to_string(),
            nav_active: "gallery".to_string(),

            h1 { "Art Gallery" }
            p { class: "text-muted", "Official art, concept sketches and key visuals." }

            div { class: "chip-row",
                if kind.is_empty() || kind == "All" {
                    Link { class: "chip chip-active", to: Route::Gallery { kind: String::new() }, "All" }
                } else {
                    Link { class: "chip", to: Route::Gallery { kind: String::new() }, "All" }
                }
                for name in gallery_categories() {
                    if kind == name {
                        Link { class: "chip chip-active", to: Route::Gallery { kind: name.to_string() }, "{name}" }
                    } else {
                        Link { class: "chip", to: Route::Gallery { kind: name.to_string() }, "{name}" }
                    }
                }
            }

            div { class: "gallery-grid",
                for piece in pieces {
                    figure {
                        key: "{piece.id}",
                        class: "gallery-item",
                        onclick: {
                            let piece = *piece;
                            move |_| lightbox.set(Some(piece))
                        },
                        img { src: "{piece.thumbnail}", alt: "{piece.title}", loading: "lazy" }
                        figcaption {
                            strong { "{piece.title}" }
                            span { class: "text-muted", "{piece.artist}" }
                        }
                    }
                }
            }

            if let Some(piece) = lightbox() {
                div { class: "lightbox", onclick: move |_| lightbox.set(None),
                    figure { class: "lightbox-figure",
                        img { src: "{piece.full_image}", alt: "{piece.title}" }
                        figcaption {
                            h3 { "{piece.title}" }
                            p { class: "text-muted", "{piece.category} · {piece.artist}" }
                        }
                        button { class: "lightbox-close", "×" }
                    }
                }
            }
        }
    }
}
