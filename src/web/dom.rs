// dom.rs - Anchor lookup and scrolling against the live document

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use super::browser_err;
use crate::error::Result;
use crate::page::{AnchorLookup, ScrollRequest, validate_anchors};

pub struct DomAnchors {
    document: Document,
}

impl DomAnchors {
    pub fn new(window: &Window) -> Option<Self> {
        window.document().map(|document| Self { document })
    }

    /// Every `id` attribute in the document, duplicates included
    pub fn ids(&self) -> Result<Vec<String>> {
        let nodes = self.document.query_selector_all("[id]").map_err(|e| browser_err("querySelectorAll", e))?;
        let ids = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| el.id())
            .collect();
        Ok(ids)
    }

    /// Each section anchor must appear exactly once
    pub fn validate(&self) -> Result<()> {
        let ids = self.ids()?;
        validate_anchors(ids.iter().map(String::as_str))
    }
}

impl AnchorLookup for DomAnchors {
    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top())
    }
}

/// Current vertical scroll; 0 if the host refuses
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll(window: &Window, request: ScrollRequest) {
    let opts = ScrollToOptions::new();
    opts.set_top(request.top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
