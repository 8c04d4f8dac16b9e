//! Bindrix - landing page for the unified social inbox
//!
//! Server-rendered with Leptos and hydrated in the browser, where the tab
//! groups, scroll reveal, FAQ accordion and waitlist forms come alive.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
