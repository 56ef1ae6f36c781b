/// Conversions between Rust values and `JsValue` at the wasm boundary
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| format!("Failed to serialize: {}", e))
}

pub fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Failed to parse: {}", e))
}

/// Human readable description of a thrown JS value
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(dom) = err.dyn_ref::<DomException>() {
        return format!("{}: {}", dom.name(), dom.message());
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Error object handed back to JS callers
pub fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
