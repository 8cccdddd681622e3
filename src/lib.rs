//! # jobboard-client
//!
//! Leptos + WASM frontend for the job-board application. Job seekers browse
//! and apply to postings; employers publish postings and respond to
//! applications. All data lives behind the REST backend; this crate holds
//! pages, components, the client-side session store, and the HTTP layer.
//!
//! The authenticated session is persisted to `localStorage` through a small
//! storage port so route guards can be evaluated synchronously on every
//! navigation without a network round-trip.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
