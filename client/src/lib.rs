//! # attendance-client
//!
//! Leptos + WASM frontend for the college attendance module: the student's
//! per-subject attendance table, the faculty marking/review screen and the
//! student details page.
//!
//! View logic lives in `state` as plain state machines so it can be tested
//! natively; `pages` and `components` are thin reactive wrappers over it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
