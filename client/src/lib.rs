//! # portfolio-client
//!
//! Leptos + WASM behavior layer for a single-page portfolio site: persisted
//! light/dark theme, scroll-linked navigation highlighting, a typed-text
//! banner, smooth in-page navigation, and reveal-on-scroll cards.
//!
//! The `ssr` feature renders the page on the server; the `hydrate` feature
//! builds the browser bundle and wires the DOM behaviors.

pub mod app;
pub mod components;
pub mod consts;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
