use crate::interop::{new_obj, set_kv};
use lifeviz::{DispatchError, LoadError};
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// `data.kind` carries the loader's own error code (csv, missing_column, ...).
pub fn load_failed(e: &LoadError) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(e.code()));
    if let LoadError::Fetch { url, .. } = e {
        set_kv(&d, "url", &JsValue::from_str(url));
    }
    err("load_failed", format!("Error loading data: {}", e), Some(d.into()))
}

pub fn dispatch_failed(e: &DispatchError) -> JsValue {
    match e {
        DispatchError::UnknownOption { control, value } => {
            let d = new_obj();
            set_kv(&d, "control", &JsValue::from_str(control.as_str()));
            set_kv(&d, "value", &JsValue::from_str(value));
            err(e.code(), e.to_string(), Some(d.into()))
        }
    }
}

#[inline]
pub fn not_loaded() -> JsValue { err("not_loaded", "no data loaded", None) }

#[inline]
pub fn invalid_mark(mark: u32) -> JsValue {
    let d = new_obj(); set_kv(&d, "mark", &JsValue::from_f64(mark as f64));
    err("invalid_mark", "no tooltip for mark", Some(d.into()))
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}
