//! Reads and writes the browser URL so list state and the active page survive
//! navigation and reload.

use wasm_bindgen::JsValue;

/// Current query string, including the leading `?` when present.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Replaces the query of the current history entry without reloading.
pub fn replace_query(params: &str) {
    let path = current_path();
    let url = if params.is_empty() {
        path
    } else {
        format!("{}?{}", path, params)
    };
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .is_err()
        {
            gloo_console::error!("Could not update the URL with the list state");
        }
    }
}

/// Pushes a new history entry for `location` (path plus optional query).
pub fn push_location(location: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(location))
            .is_err()
        {
            gloo_console::error!("Could not navigate to", location);
        }
    }
}
