//! # client
//!
//! Leptos + WASM frontend that sends a document template to a seller and a
//! buyer for signature.
//!
//! This crate contains the page, the submission form component, its state,
//! and the transport for the one outbound request. The `ssr` feature renders
//! it from the `server` crate; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
