//! Browser bindings: `web-sys` implementations of the [`crate::dom`] traits
//! and the exported entry points.
//!
//! Requires a browser environment. Nothing here holds logic of its own;
//! every decision is made by the core controllers.

pub mod node;
pub mod observer;
pub mod storage;
pub mod wiring;

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;

/// Module start hook: route `log` records and panics to the console.
#[wasm_bindgen(start)]
pub fn init_console() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("nebula: logger already installed"));
    }
}

/// Wire the interaction layer to the current page.
///
/// `config_json` is an optional JSON object overriding [`SiteConfig`]
/// defaults. A malformed config is the only error reported to the caller;
/// everything else degrades feature by feature.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<(), JsValue> {
    let config = SiteConfig::from_optional_json(config_json.as_deref())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    wiring::mount(&config);
    Ok(())
}
