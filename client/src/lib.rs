//! # client
//!
//! Leptos frontend for the folio site. Pages are thin; the engineered part
//! is the session gate: the auth context, the `RouteGuard` component, the
//! browser token adapters, and the authenticated fetch helpers.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
