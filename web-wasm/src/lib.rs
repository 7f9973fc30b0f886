//! CommunityFix Web App (Leptos + WASM)

mod app;
mod components;
mod nav;
mod pages;
mod preview;
mod storage;
mod toast;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
