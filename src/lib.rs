// lib.rs - Root module for the catalog_dashboard library
//
// The web_app module holds the whole application. The hydrate() entry
// point below is what the WASM bundle calls once the server-rendered
// HTML has loaded in the browser.

pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
