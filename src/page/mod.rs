// page/ - Page composition state
//
// Section order and anchors, the nav bar state machine, and the two timed
// diagrams. Nothing here touches the DOM; `web` feeds it events.

mod diagrams;
mod nav;
mod sections;

pub use diagrams::{LAYER_PERIOD_MS, LayerPipeline, TRANSIT_PERIOD_MS, TransitDiagram};
pub use nav::{
    AnchorLookup, HEADER_OFFSET, Menu, NavState, SCROLL_THRESHOLD, ScrollPosition, ScrollRequest,
    scroll_target, scroll_to_section,
};
pub use sections::{Backdrop, NAV_LINKS, NavLink, PAGE_ORDER, Section, validate_anchors};
