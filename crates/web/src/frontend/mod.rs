//! Leptos frontend (client-side rendered).

pub mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    catalog_observability::init();

    tracing::info!("mounting product catalog");
    leptos::mount_to_body(app::App);
}
