//! Host Page Configuration
//!
//! A page may define `window.cartConfig = { ... }` before the widget loads
//! to override any `CartConfig` field.

use cart_core::{CartConfig, CartError};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "cartConfig";

/// Read overrides from the host page, falling back to defaults
pub fn load() -> CartConfig {
    let Some(window) = web_sys::window() else {
        return CartConfig::default();
    };
    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => return CartConfig::default(),
    };

    let parsed = serde_wasm_bindgen::from_value::<CartConfig>(raw)
        .map_err(|e| CartError::Config(e.to_string()))
        .and_then(|config| config.validate().map(|()| config));

    match parsed {
        Ok(config) => {
            log::info!("[CONFIG] using window.{} overrides", CONFIG_GLOBAL);
            config
        }
        Err(e) => {
            log::warn!("[CONFIG] ignoring window.{}: {}", CONFIG_GLOBAL, e);
            CartConfig::default()
        }
    }
}
