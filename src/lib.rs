//! # dashboard-ui
//!
//! Leptos + WASM behavior layer for the server-rendered admin dashboard.
//! Stacked modals over remote HTML fragments, the searchable select widget,
//! the polled info/streams/tasks/log regions and the delegated page actions
//! all live here; the server keeps rendering markup and owns all data.
//!
//! Pure models sit in [`state`] and are tested natively. Everything touching
//! the browser is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    app::start();
}
