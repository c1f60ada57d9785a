use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use redpen_shared::TrackerConfig;

pub const CONFIG_ELEMENT_ID: &str = "redpen-config";

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn window_and_document() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    Ok((window, document))
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    debug_flag(&search)
}

/// True when the query string carries `debug=1` or `debug=true` as a pair.
pub fn debug_flag(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "debug" && (value == "1" || value == "true"))
}

pub fn document_ready_state(document: &Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

pub fn parse_config(text: &str) -> Result<TrackerConfig, JsValue> {
    TrackerConfig::from_json(text).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Reads the optional inline JSON config element; defaults when absent.
pub fn load_config(document: &Document) -> Result<TrackerConfig, JsValue> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(TrackerConfig::default());
    };
    let text = element.text_content().unwrap_or_default();
    parse_config(&text)
}
