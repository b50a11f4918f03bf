use anyhow::{Context, Result};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Options object → render configuration. `undefined`/`null` and missing keys take the defaults.
pub(crate) fn parse_options(options: JsValue) -> Result<migramap_core::RenderConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(migramap_core::RenderConfig::default())
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("[FlowMap] Invalid options object")
}

/// Serialize plain data for JS, with maps as plain objects.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| e.into())
}
