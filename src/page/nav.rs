// nav.rs - Nav bar state machine
//
// Two independent flags: menu {closed, open} and scroll {top, scrolled}.
// Every transition is total. Link activation closes the menu before any
// scroll is attempted, even when the target anchor does not exist.

use log::{debug, trace};

use super::sections::Section;

/// Nav bar switches to its compact style past this offset (px)
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Clearance left above a section after scrolling to it (px)
pub const HEADER_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPosition {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollPosition {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD { Self::Scrolled } else { Self::AtTop }
    }
}

/// Fire-and-forget smooth scroll to an absolute document offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
}

/// Resolves an anchor id to its element's viewport-relative top edge
pub trait AnchorLookup {
    fn element_top(&self, id: &str) -> Option<f64>;
}

impl<F: Fn(&str) -> Option<f64>> AnchorLookup for F {
    fn element_top(&self, id: &str) -> Option<f64> {
        self(id)
    }
}

/// Document offset that puts `element_top` just under the header
#[inline]
pub fn scroll_target(element_top: f64, current_scroll: f64) -> f64 {
    element_top + current_scroll - HEADER_OFFSET
}

/// None when no element carries `id`
pub fn scroll_to_section(anchors: &impl AnchorLookup, id: &str, current_scroll: f64) -> Option<ScrollRequest> {
    let top = anchors.element_top(id)?;
    Some(ScrollRequest { top: scroll_target(top, current_scroll) })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    menu: Menu,
    scroll: ScrollPosition,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == Menu::Open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll == ScrollPosition::Scrolled
    }

    /// Returns true if the scrolled flag flipped
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let next = ScrollPosition::from_offset(offset);
        let changed = next != self.scroll;
        if changed {
            trace!("nav: {:?} -> {:?} at {offset}px", self.scroll, next);
        }
        self.scroll = next;
        changed
    }

    pub fn toggle_menu(&mut self) -> Menu {
        self.menu = match self.menu {
            Menu::Closed => Menu::Open,
            Menu::Open => Menu::Closed,
        };
        self.menu
    }

    pub fn close_menu(&mut self) {
        self.menu = Menu::Closed;
    }

    /// Close the menu, then resolve the scroll for section `id` (`#` optional).
    /// Ids that name no section scroll nowhere.
    pub fn activate_link(
        &mut self,
        anchors: &impl AnchorLookup,
        id: &str,
        current_scroll: f64,
    ) -> Option<ScrollRequest> {
        self.close_menu();
        let section = match id.parse::<Section>() {
            Ok(section) => section,
            Err(e) => {
                debug!("nav: {e}");
                return None;
            }
        };
        let anchor = section.anchor()?;
        let request = scroll_to_section(anchors, anchor, current_scroll);
        if request.is_none() {
            trace!("nav: no element for #{anchor}");
        }
        request
    }

    /// Logo click: back to the very top
    pub fn activate_logo(&mut self) -> ScrollRequest {
        ScrollRequest { top: 0.0 }
    }
}
