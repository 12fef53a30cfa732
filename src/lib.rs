//! # todo-ui
//!
//! Leptos + WASM frontend for the to-do list service.
//!
//! This crate contains pages, components, per-component state machines, and
//! the HTTP client for the record store. The backend is an external
//! collaborator reached only through its REST contract; every view re-queries
//! it after a confirmed write instead of patching local copies.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Browser entry point: install the panic hook and console logger, then
/// mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    log::debug!("mounting todo-ui against {}", config::AppConfig::from_env().api_base);
    leptos::mount::mount_to_body(app::App);
}
