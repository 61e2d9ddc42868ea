//! # client
//!
//! Leptos frontend for the GiveBack Hub nonprofit site.
//!
//! Pages and components are rendered on the server (`ssr` feature) and
//! hydrated in the browser (`hydrate` feature). Domain data comes from the
//! `catalog` crate; this crate owns only view composition, per-page reactive
//! state, and the bridge to the Leaflet map widget.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating GiveBack Hub");
    leptos::mount::hydrate_body(app::App);
}
