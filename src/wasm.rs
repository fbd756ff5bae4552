//! WASM bindings for UKL Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { translate } from 'ukl_core';
//!
//! await init();
//!
//! const toml = translate(`
//!   var port = 8080;
//!   { server: { port: |port| } }
//! `);
//! ```

use wasm_bindgen::prelude::*;

use crate::emit::OutputFormat;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Translate UKL source to TOML.
///
/// Throws a JavaScript error carrying the parse error message on failure.
#[wasm_bindgen]
pub fn translate(source: &str) -> Result<String, JsValue> {
    crate::translate_str(source, OutputFormat::Toml).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Translate UKL source to pretty-printed JSON.
#[wasm_bindgen]
pub fn translate_json(source: &str) -> Result<String, JsValue> {
    crate::translate_str(source, OutputFormat::Json).map_err(|e| JsValue::from_str(&e.to_string()))
}
