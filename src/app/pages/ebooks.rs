//! eBooks page: category-filtered grid of book cards.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;
use crate::catalog::{ebook_categories, ebooks_in_category, filled_stars};

#[component]
pub fn Ebooks(category: String) -> Element {
    let books = ebooks_in_category(&category);

    rsx! {
        Layout {
            title: "eBooks".to_string(),
            nav_active: "ebooks".to_string(),

            h1 { "eBook Library" }
            p { class: "text-muted", "Dive deeper into the worlds of your favorite series." }

            div { class: "chip-row",
                if category.is_empty() {
                    Link { class: "chip chip-active", to: Route::Ebooks { category: String::new() }, "All" }
                } else {
                    Link { class: "chip", to: Route::Ebooks { category: String::new() }, "All" }
                }
                for name in ebook_categories() {
                    if category.eq_ignore_ascii_case(name) {
                        Link { class: "chip chip-active", to: Route::Ebooks { category: name.to_string() }, "{name}" }
                    } else {
                        Link { class: "chip", to: Route::Ebooks { category: name.to_string() }, "{name}" }
                    }
                }
            }

            if books.is_empty() {
                article { class: "empty-state", "No ebooks in this category yet." }
            } else {
                div { class: "card-grid",
                    for book in books {
                        article { key: "{book.id}", class: "ebook-card",
                            img { class: "ebook-cover", src: "{book.cover}", alt: "{book.title}" }
                            div { class: "ebook-body",
                                h3 { "{book.title}" }
                                p { class: "text-muted", "by {book.author}" }
                                div { class: "star-row", aria_label: "{book.rating} out of 5",
                                    for i in 0..5 {
                                        if i < filled_stars(book.rating) {
                                            span { class: "star star-filled", "★" }
                                        } else {
                                            span { class: "star", "☆" }
                                        }
                                    }
                                    span { class: "rating-value", "{book.rating}" }
                                }
                                div { class: "tag-row",
                                    for tag in book.categories {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                                button { class: "btn btn-primary", "Read Now" }
                            }
                        }
                    }
                }
            }
        }
    }
}
