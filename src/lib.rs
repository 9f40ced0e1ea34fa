//! # medilink-client
//!
//! Leptos + WASM frontend for the MediLink healthcare platform: session and
//! authentication lifecycle, profile management, doctor discovery and
//! following, messaging, disease-image detection, and admin dashboards.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client wrapper. Screens render data fetched from the remote
//! API; the session store in `state::session` is the single source of truth
//! for "who is logged in".

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
