//! # client
//!
//! Leptos + WASM frontend for the PetSOS pet directory.
//!
//! This crate contains pages, components, listing and form state, and the
//! HTTP helpers that talk to the host's `/api/pets` endpoint. The `ssr`
//! feature lets the `server` crate render the same component tree; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: attach the reactive tree to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
