//! # stocktrackr
//!
//! Leptos + WASM frontend for a multi-building inventory tracker.
//!
//! The client is the whole application surface here: authentication against
//! a bearer-token identity provider, building/room navigation over floorplan
//! images, cycle-count carts, item management forms, and the dashboard
//! reports with CSV exports. The backend is a plain JSON API this crate only
//! talks to.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
