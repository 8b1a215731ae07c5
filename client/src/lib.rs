//! # client
//!
//! Leptos + WASM frontend for the news context agent.
//!
//! This crate contains the page shell, the query tool component, its local
//! state machine, and the HTTP call to the `/chat` backend. The `ssr` feature
//! renders it on the host; the `hydrate` feature attaches it in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
