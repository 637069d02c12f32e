//! # updesk-client
//!
//! Leptos + WASM front end for the UpDesk helpdesk's chamado chat.
//! Replaces the inline page scripts of the legacy panel with a Rust-native
//! UI layer: a polling transcript panel plus the message send form.
//!
//! This crate contains pages, components, application state, the wire
//! types for the message API, and the polling synchronizer that keeps the
//! transcript consistent with server state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
