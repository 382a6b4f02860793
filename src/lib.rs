//! Umbros: Shadow Awakening - anime content portal.
//!
//! A client-side Dioxus single-page app:
//! - Mock authentication (localStorage-backed sessions, salted password hashes)
//! - Browsing pages for ebooks, stories, gallery and episode releases
//! - A mock AI media generator behind an injectable interface

pub mod app;
pub mod auth;
pub mod catalog;
pub mod generation;
