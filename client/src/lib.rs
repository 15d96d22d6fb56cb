//! # client
//!
//! Leptos + WASM host for the polygon workspace widget.
//!
//! The `canvas` crate owns all state and behavior; this crate renders that
//! state as HTML/SVG, forwards DOM mouse, wheel, and drag-and-drop events to
//! the engine, binds the host page's create/save/reset controls, and backs
//! persistence with `window.localStorage`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    app::mount();
}
