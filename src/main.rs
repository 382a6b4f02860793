//! Umbros: Shadow Awakening - browser entry point.
//!
//! The whole app runs client side; there is no server component. Build with
//! the `web` feature (dx passes it) to get the wasm renderer.

fn main() {
    #[cfg(feature = "web")]
    {
        dioxus::logger::initialize_default();
        dioxus::launch(umbros_portal::app::App);
    }
}
