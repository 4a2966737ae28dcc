//! Browser entry point for the Sitekit WASM bundle.

#![no_main]

use leptos::logging::log;
use leptos::prelude::*;
use sitekit_ui::App;
use sitekit_ui::config::LOADING_ELEMENT_ID;
use wasm_bindgen::prelude::wasm_bindgen;

/// Runs once the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    clear_placeholder(LOADING_ELEMENT_ID);
    log!("Mounting Sitekit");
    mount_to_body(App);
}

/// Drop the static placeholder shown while the bundle loads.
fn clear_placeholder(id: &str) {
    let placeholder = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    if let Some(element) = placeholder {
        element.remove();
    }
}
