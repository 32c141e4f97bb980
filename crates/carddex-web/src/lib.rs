#[macro_use]
extern crate log;

mod app;
mod catalogue;
mod common;
mod details;
mod favorites;
mod query;
mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    info!("carddex loaded");

    utils::initialize_urls();
    favorites::attach();

    dominator::append_dom(&dominator::body(), app::render());

    Ok(())
}
