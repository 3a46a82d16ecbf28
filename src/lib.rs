//! WebAssembly entry point for the sketchboard drawing surface.
//!
//! The geometry and interaction engine lives in the `canvas` crate; this crate
//! installs logging and the panic hook, and exposes [`board::Board`] to the
//! page script. The page owns the DOM: it forwards pointer, wheel, and resize
//! events, applies returned cursors, and drives repaints.

pub mod board;
pub mod dom;
pub mod error;

use wasm_bindgen::prelude::*;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        tracing::warn!("console logger already installed");
    }
    tracing::info!("sketchboard initialized");
}
