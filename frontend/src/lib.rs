//! Browser entry point for the DeepDoc search client.

use app::App;
use wasm_bindgen::prelude::*;

/// Installs the panic hook and console logger, then mounts the app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(level);
    log::info!("deepdoc {} starting", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(App);
}
