//! # petdesk
//!
//! Leptos admin client for a pet shop, veterinary clinic and grooming
//! business. The crate's substance is the session subsystem: deciding whether
//! a visitor is authenticated, keeping that decision fresh, reacting to
//! expiry, and protecting every authenticated route the same way.
//!
//! Built three ways: `hydrate` for the browser bundle, `ssr` for the server
//! binary, and with no feature for native unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "ssr")]
pub mod server;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
