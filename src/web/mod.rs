// web/ - Browser glue (wasm32 only)
//
// Every host registration is returned inside a `Scoped` guard; dropping
// the guard unregisters it.

mod dom;
mod events;

pub use dom::{DomAnchors, scroll_offset, smooth_scroll};
pub use events::{EventListener, FrameLoop, Interval};

use wasm_bindgen::JsValue;

use crate::error::EngineError;

pub(crate) fn window() -> Result<web_sys::Window, EngineError> {
    web_sys::window().ok_or_else(|| EngineError::Browser("no global window".into()))
}

pub(crate) fn browser_err(context: &str, e: JsValue) -> EngineError {
    EngineError::Browser(format!("{context}: {e:?}"))
}
