//! # client
//!
//! Leptos + WASM frontend for the WoundTrack clinical wound-documentation
//! portal. Clinicians sign in (password + one-time code), manage patient
//! records, photograph and upload wound images, and file assessments against
//! a remote clinical REST API.
//!
//! This crate contains pages, components, application state, network types,
//! and browser-environment utilities. The clinical API is an external
//! collaborator reached over HTTP; nothing in this crate persists clinical
//! data locally beyond session and navigation context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
