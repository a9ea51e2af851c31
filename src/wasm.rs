//! WASM bindings for proofmap.
//!
//! Exposes `layout` and `layoutWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;

/// Lay out every chapter of a JSON record array with default settings.
#[wasm_bindgen]
pub fn layout(records: &str) -> Result<String, JsError> {
    crate::layout_records_json(records, &LayoutConfig::default(), None)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out with a JSON `LayoutConfig` (empty string for defaults).
#[wasm_bindgen(js_name = "layoutWithOptions")]
pub fn layout_with_options(records: &str, config: &str) -> Result<String, JsError> {
    let config = if config.trim().is_empty() {
        LayoutConfig::default()
    } else {
        LayoutConfig::from_json_str(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    crate::layout_records_json(records, &config, None).map_err(|e| JsError::new(&e.to_string()))
}
