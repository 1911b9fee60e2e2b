//! Browser Host Bindings
//!
//! Thin wrappers over the web APIs the controller needs, organized by concern.
//! Failures come back as `Err(String)`; callers decide whether the user hears
//! about them.

mod dialog;
mod files;
mod selection;

use wasm_bindgen::{JsCast, JsValue};

// Re-export all public items
pub use dialog::*;
pub use files::*;
pub use selection::*;

/// Best-effort text for a rejected promise or thrown exception
fn js_err(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

fn document() -> Result<web_sys::Document, String> {
    window()?.document().ok_or_else(|| "no document".to_string())
}
