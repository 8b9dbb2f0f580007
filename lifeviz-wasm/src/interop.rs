use js_sys::{Array, Object, Reflect};
use lifeviz::VizConfig;
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_str(items: &[String]) -> Array {
    items.iter().map(|s| JsValue::from_str(s)).collect()
}
pub fn to_js<T: Serialize>(v: &T) -> JsValue {
    serde_wasm_bindgen::to_value(v).unwrap_or(JsValue::NULL)
}

/// `undefined` and `null` mean the default configuration.
pub fn config_from_js(v: JsValue) -> Result<VizConfig, String> {
    if v.is_undefined() || v.is_null() {
        return Ok(VizConfig::default());
    }
    let json: serde_json::Value = serde_wasm_bindgen::from_value(v).map_err(|e| e.to_string())?;
    VizConfig::from_json_value(json).map_err(|e| e.to_string())
}
