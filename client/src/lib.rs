//! # client
//!
//! Leptos + WASM chat widget for the mechanic advice assistant.
//!
//! The widget posts a question and category to `/api/chat`, renders the
//! advice and similar cases, and keeps the last ten exchanges in browser
//! `localStorage`. All state transitions live in the `advice` crate; this
//! crate only binds them to signals, the DOM, and browser APIs.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
